//! Interaction scripts replayed on a virtual clock.
//!
//! A script is a list of steps such as `add:1 email:a@b.com subscribe
//! wait:3000`. Each step produces a [`Frame`] with the elapsed virtual time and
//! the resulting [`ViewState`].

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use crate::catalog::ItemId;
use crate::controller::ViewController;
use crate::error::ScriptError;
use crate::state::{ViewEvent, ViewState};
use crate::timer::ManualClock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Event(ViewEvent),
    Wait(Duration),
}

impl FromStr for Step {
    type Err = ScriptError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (head, arg) = match raw.split_once(':') {
            Some((head, arg)) => (head, Some(arg)),
            None => (raw, None),
        };

        match (head, arg) {
            ("menu", None) => Ok(Step::Event(ViewEvent::ToggleMenu)),
            ("subscribe", None) => Ok(Step::Event(ViewEvent::Subscribe)),
            ("add", Some(id)) => id
                .parse()
                .map(|id| Step::Event(ViewEvent::AddToCart(ItemId(id))))
                .map_err(|_| ScriptError::InvalidItemId(raw.to_string())),
            ("email", Some(text)) => Ok(Step::Event(ViewEvent::UpdateEmailDraft(text.to_string()))),
            ("wait", Some(ms)) => ms
                .parse()
                .map(|ms| Step::Wait(Duration::from_millis(ms)))
                .map_err(|_| ScriptError::InvalidDelay(raw.to_string())),
            _ => Err(ScriptError::UnknownStep(raw.to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Event(ViewEvent::ToggleMenu) => f.write_str("menu"),
            Step::Event(ViewEvent::AddToCart(id)) => write!(f, "add:{id}"),
            Step::Event(ViewEvent::UpdateEmailDraft(text)) => write!(f, "email:{text}"),
            Step::Event(ViewEvent::Subscribe) => f.write_str("subscribe"),
            Step::Wait(delay) => write!(f, "wait:{}", delay.as_millis()),
        }
    }
}

/// Parse every step, failing on the first bad one.
pub fn parse_steps<I, S>(raw: I) -> Result<Vec<Step>, ScriptError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter().map(|step| step.as_ref().parse()).collect()
}

/// State after one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub at_ms: u64,
    pub step: String,
    pub state: ViewState,
}

/// A view controller driven by a virtual clock.
pub struct Simulation {
    clock: ManualClock,
    view: ViewController<ManualClock>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    pub fn new() -> Self {
        let clock = ManualClock::new();
        let view = ViewController::new(clock.clone());
        Self { clock, view }
    }

    pub fn state(&self) -> &ViewState {
        self.view.state()
    }

    pub fn step(&mut self, step: &Step) -> Frame {
        match step {
            Step::Event(event) => self.view.apply(event.clone()),
            Step::Wait(delay) => {
                self.view.advance(*delay);
            }
        }
        Frame {
            at_ms: self.clock.now().as_millis() as u64,
            step: step.to_string(),
            state: self.view.state().clone(),
        }
    }

    pub fn run(&mut self, steps: &[Step]) -> Vec<Frame> {
        steps.iter().map(|step| self.step(step)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_every_step_kind() {
        let steps = parse_steps(["menu", "add:2", "email:a@b.com", "subscribe", "wait:3000"]).unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Event(ViewEvent::ToggleMenu),
                Step::Event(ViewEvent::AddToCart(ItemId(2))),
                Step::Event(ViewEvent::UpdateEmailDraft("a@b.com".into())),
                Step::Event(ViewEvent::Subscribe),
                Step::Wait(Duration::from_millis(3000)),
            ]
        );
    }

    #[test]
    fn email_may_contain_colons() {
        let step: Step = "email:mailto:x@y".parse().unwrap();
        assert_eq!(step, Step::Event(ViewEvent::UpdateEmailDraft("mailto:x@y".into())));
        assert_eq!(step.to_string(), "email:mailto:x@y");
    }

    #[test]
    fn rejects_bad_steps() {
        assert_eq!("dance".parse::<Step>(), Err(ScriptError::UnknownStep("dance".into())));
        assert_eq!("add:x".parse::<Step>(), Err(ScriptError::InvalidItemId("add:x".into())));
        assert_eq!("wait:-1".parse::<Step>(), Err(ScriptError::InvalidDelay("wait:-1".into())));
        assert!("menu:1".parse::<Step>().is_err());
    }

    #[test]
    fn replays_the_subscribe_scenario() {
        let steps = parse_steps(["add:1", "email:a@b.com", "subscribe", "wait:2999", "wait:1"]).unwrap();
        let frames = Simulation::new().run(&steps);

        assert_eq!(frames[0].state.cart_count, 1);
        assert_eq!(frames[2].state.email_draft, "");
        assert!(frames[2].state.subscribe_success_visible);
        assert!(frames[3].state.subscribe_success_visible);
        assert_eq!(frames[4].at_ms, 3000);
        assert!(!frames[4].state.subscribe_success_visible);
    }
}
