//! Lane buttons.
//!
//! One momentary switch per lane, wired to ground. The internal pull-up keeps
//! the line high while released, so a press reads low.

use alloc::{
    vec,
    vec::Vec,
};

use esp_hal::gpio::{
    Input,
    InputConfig,
    Pull,
};

use crate::ButtonResources;

/// The three lane buttons, ready for polling.
pub struct Buttons {
    pub lane1: Input<'static>,
    pub lane2: Input<'static>,
    pub lane3: Input<'static>,
}

impl From<ButtonResources<'static>> for Buttons {
    fn from(res: ButtonResources<'static>) -> Self {
        let pull_up = InputConfig::default().with_pull(Pull::Up);
        Self {
            lane1: Input::new(res.lane1, pull_up),
            lane2: Input::new(res.lane2, pull_up),
            lane3: Input::new(res.lane3, pull_up),
        }
    }
}

impl Buttons {
    /// Buttons in lane order.
    pub fn into_lanes(self) -> Vec<Input<'static>> {
        vec![self.lane1, self.lane2, self.lane3]
    }
}
