/// Squaring as a dedicated operation.
///
/// In a binary field squaring is linear and runs in a fraction of the time of
/// a general multiplication, so implementors provide it separately rather than
/// falling back to `self * self`.
pub trait Square {
    fn square(&self) -> Self;
}
