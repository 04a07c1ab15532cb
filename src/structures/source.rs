/// The source of a dependency in a closure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DependencySource {
    /// A dependency given as input.
    Original,

    /// A dependency of a determinant on some non-empty subset of itself.
    Trivial,

    /// A dependency obtained by adding the same attributes to both sides of some dependency.
    Augmentation,

    /// A dependency obtained by chaining dependencies, where the dependent of one is the determinant of another.
    Transitivity,
}

impl std::fmt::Display for DependencySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original => write!(f, "Original"),
            Self::Trivial => write!(f, "Trivial"),
            Self::Augmentation => write!(f, "Augmentation"),
            Self::Transitivity => write!(f, "Transitivity"),
        }
    }
}
