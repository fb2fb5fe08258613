pub(crate) const PROGRAM: &str = "mltree";

pub(crate) const DEF_MODEL: &str = "GTR+G";
pub(crate) const DEF_LH_EPSILON: f64 = 0.1;
pub(crate) const DEF_SPR_CUTOFF: f64 = 1.0;
pub(crate) const DEF_NUM_THREADS: u32 = 2;
