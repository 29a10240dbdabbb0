pub mod scroll;

pub use scroll::{
    CancelReason, ScrollCallbacks, ScrollMessage, ScrollMode, ScrollOptions, Scroller,
    StopOptions, UserInput,
};
