pub mod check;
pub mod preflight;
pub mod sync;
pub mod verify;
