use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::SimdKernel;

/// Pick the widest vector instruction tier this CPU supports.
pub(crate) fn simd_autodetect() -> SimdKernel {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("avx2") {
            return SimdKernel::Avx2;
        }

        if is_x86_feature_detected!("avx") {
            return SimdKernel::Avx;
        }

        if is_x86_feature_detected!("sse3") {
            return SimdKernel::Sse3;
        }
    }

    SimdKernel::Generic
}

/// Wall-clock seconds since the epoch, for the default random seed.
pub(crate) fn time_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0)
}
