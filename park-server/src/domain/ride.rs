//! Ride type.

/// An attraction with its current wait.
///
/// Rides carry no identity beyond their name and are rebuilt from the
/// upstream payload on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ride {
    pub name: String,
    /// Current wait in minutes.
    pub wait_time: u32,
    pub is_open: bool,
}

impl Ride {
    /// Create a new ride.
    pub fn new(name: impl Into<String>, wait_time: u32, is_open: bool) -> Self {
        Self {
            name: name.into(),
            wait_time,
            is_open,
        }
    }

    /// Display ordering: open rides first, then shortest wait.
    pub fn sort_key(&self) -> (bool, u32) {
        (!self.is_open, self.wait_time)
    }
}
