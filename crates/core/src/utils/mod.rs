//! Small pure helpers shared by the synchronizers.

pub mod dates;
