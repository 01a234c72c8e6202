#![forbid(unsafe_code)]

//! Single-queue program loop.
//!
//! The runtime owns the [`Location`] and one FIFO of [`Event`]s. Terminal
//! input and drained fragment signals go through the same queue, so every
//! state transition happens in delivery order and each event's work
//! completes before the next event is looked at. There is exactly one
//! state writer per concern and no locking anywhere.
//!
//! Commands returned from `update` run synchronously, in order. A
//! [`Cmd::WriteFragment`] only *enqueues* the resulting change signal; the
//! signal is drained after the current event finishes, so a follow-up
//! [`Cmd::Msg`] in the same batch is always processed before the listener
//! reacts to the write. That ordering is what link activation relies on.

use crate::location::Location;
use folio_core::event::Event;
use folio_core::logging::debug;
use folio_render::buffer::Buffer;
use std::collections::VecDeque;

/// A side effect requested by the model.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Quit the program.
    Quit,
    /// Feed a message back into the model, synchronously.
    Msg(M),
    /// Execute commands in order.
    Batch(Vec<Cmd<M>>),
    /// Rewrite the location fragment (signal delivery is asynchronous).
    WriteFragment(String),
}

impl<M> Cmd<M> {
    /// No operation.
    #[must_use]
    pub fn none() -> Self {
        Cmd::None
    }

    /// Quit the program.
    #[must_use]
    pub fn quit() -> Self {
        Cmd::Quit
    }

    /// Feed a message back into the model.
    #[must_use]
    pub fn msg(msg: M) -> Self {
        Cmd::Msg(msg)
    }

    /// Execute commands in order.
    #[must_use]
    pub fn batch(cmds: Vec<Cmd<M>>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Rewrite the location fragment.
    #[must_use]
    pub fn write_fragment(fragment: impl Into<String>) -> Self {
        Cmd::WriteFragment(fragment.into())
    }
}

/// Application state and behavior.
pub trait Model: Sized {
    /// Message type; every event must convert into one.
    type Message: From<Event>;

    /// Update state in response to a message; return follow-up effects.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state into the buffer.
    fn view(&self, buf: &mut Buffer);
}

/// The program: model + location + event queue + front buffer.
pub struct Program<M: Model> {
    model: M,
    location: Location,
    queue: VecDeque<Event>,
    buffer: Buffer,
    running: bool,
    dirty: bool,
    frames: u64,
}

impl<M: Model> Program<M> {
    /// Create a program over an already-wired model and location.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0 (buffer invariant).
    pub fn new(model: M, location: Location, width: u16, height: u16) -> Self {
        Self {
            model,
            location,
            queue: VecDeque::new(),
            buffer: Buffer::new(width, height),
            running: true,
            dirty: true,
            frames: 0,
        }
    }

    /// Enqueue an external event.
    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Process queued events until the queue is idle.
    ///
    /// Pending fragment signals are drained into the queue between events,
    /// so a write made while handling one event is delivered afterwards,
    /// never reentrantly.
    pub fn process(&mut self) {
        loop {
            self.pump_location();
            let Some(event) = self.queue.pop_front() else {
                break;
            };
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: Event) {
        if let Event::Resize { width, height } = event {
            if width > 0 && height > 0 {
                self.buffer = Buffer::new(width, height);
            }
        }
        debug!(?event, "dispatch");
        let cmd = self.model.update(event.into());
        self.dirty = true;
        self.exec(cmd);
    }

    fn exec(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(msg) => {
                let next = self.model.update(msg);
                self.dirty = true;
                self.exec(next);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.exec(cmd);
                }
            }
            Cmd::WriteFragment(fragment) => self.location.set_fragment(&fragment),
        }
    }

    fn pump_location(&mut self) {
        for change in self.location.drain() {
            self.queue.push_back(Event::Fragment {
                fragment: change.fragment,
                subscription: change.subscription,
            });
        }
    }

    /// Whether the program should keep running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Paint the current state if anything changed, returning the buffer.
    pub fn render(&mut self) -> &Buffer {
        if self.dirty {
            self.buffer.clear();
            self.model.view(&mut self.buffer);
            self.frames += 1;
            self.dirty = false;
        }
        &self.buffer
    }

    /// Number of frames actually painted.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The model, mutably.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// The location, mutably (the host's write path for direct edits).
    pub fn location_mut(&mut self) -> &mut Location {
        &mut self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::FragmentSubscription;
    use folio_core::event::KeyEvent;

    /// Minimal model recording the order in which messages arrive.
    struct Probe {
        sub: FragmentSubscription,
        log: Vec<String>,
    }

    enum ProbeMsg {
        Event(Event),
        Note(&'static str),
    }

    impl From<Event> for ProbeMsg {
        fn from(event: Event) -> Self {
            ProbeMsg::Event(event)
        }
    }

    impl Model for Probe {
        type Message = ProbeMsg;

        fn update(&mut self, msg: ProbeMsg) -> Cmd<ProbeMsg> {
            match msg {
                ProbeMsg::Event(Event::Fragment {
                    fragment,
                    subscription,
                }) => {
                    if subscription == self.sub.id() {
                        self.log.push(format!("fragment:{fragment}"));
                    }
                    Cmd::none()
                }
                ProbeMsg::Event(Event::Key(k)) if k.is_char('n') => {
                    // the link-activation shape: write, then follow up
                    Cmd::batch(vec![
                        Cmd::write_fragment("/about"),
                        Cmd::msg(ProbeMsg::Note("follow-up")),
                    ])
                }
                ProbeMsg::Event(Event::Key(k)) if k.is_char('q') => Cmd::quit(),
                ProbeMsg::Event(_) => Cmd::none(),
                ProbeMsg::Note(note) => {
                    self.log.push(format!("note:{note}"));
                    Cmd::none()
                }
            }
        }

        fn view(&self, _buf: &mut Buffer) {}
    }

    fn probe_program() -> Program<Probe> {
        let mut location = Location::new("/");
        let sub = location.subscribe();
        Program::new(
            Probe {
                sub,
                log: Vec::new(),
            },
            location,
            20,
            5,
        )
    }

    #[test]
    fn follow_up_runs_before_fragment_delivery() {
        let mut program = probe_program();
        program.push(Event::Key(KeyEvent::new(folio_core::event::KeyCode::Char(
            'n',
        ))));
        program.process();
        assert_eq!(
            program.model().log,
            vec!["note:follow-up".to_string(), "fragment:/about".to_string()]
        );
    }

    #[test]
    fn direct_fragment_edit_is_delivered() {
        let mut program = probe_program();
        program.location_mut().set_fragment("/projects");
        program.process();
        assert_eq!(program.model().log, vec!["fragment:/projects".to_string()]);
    }

    #[test]
    fn quit_stops_running() {
        let mut program = probe_program();
        assert!(program.is_running());
        program.push(Event::Key(KeyEvent::new(folio_core::event::KeyCode::Char(
            'q',
        ))));
        program.process();
        assert!(!program.is_running());
    }

    #[test]
    fn render_only_repaints_when_dirty() {
        let mut program = probe_program();
        program.render();
        assert_eq!(program.frames(), 1);
        program.render();
        assert_eq!(program.frames(), 1);
        program.push(Event::Tick);
        program.process();
        program.render();
        assert_eq!(program.frames(), 2);
    }

    #[test]
    fn released_listener_sees_no_delivery() {
        let mut program = probe_program();
        program.model_mut().sub.cancel();
        program.location_mut().set_fragment("/about");
        program.process();
        assert!(program.model().log.is_empty());
        // nothing dispatched, so nothing marked dirty
        program.render();
        let before = program.frames();
        program.render();
        assert_eq!(program.frames(), before);
    }

    #[test]
    fn resize_rebuilds_buffer() {
        let mut program = probe_program();
        program.push(Event::Resize {
            width: 30,
            height: 7,
        });
        program.process();
        assert_eq!(program.render().width(), 30);
        assert_eq!(program.render().height(), 7);
    }
}
