/// Describes what happens at the bounds of the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Topology {
    /// Dimensions never change; cells beyond the bounds are always dead.
    #[default]
    FixedBounds,
    /// A ring of dead cells is added whenever a border cell is alive.
    AutoGrow,
}
