/// Counts for various things which count.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every assertion made through the context, refused or not.
    pub assertions: usize,

    /// A count of assertions refused.
    pub refusals: usize,
}
