pub mod controller;
pub mod state;

pub use controller::{SideEffect, SnapshotObserver, TransitionResult, ViewCommand, ViewController};
pub use state::{Screen, ScreenId, Session, SessionSnapshot, SignInPolicy, Stage, Tab, Theme};
