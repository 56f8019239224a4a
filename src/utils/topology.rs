/// Describes how neighbor lookups treat the field borders.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Topology {
    /// Bounds of the field are stitched together.
    Torus,
    /// Lookups past a border see dead cells.
    Bounded,
}
