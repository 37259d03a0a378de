/// What the driver of a [`State`] machine should do with the current input
/// after a call to [`State::handle`].
pub enum SequenceAction {
    /// Consume the input and move on to the next one.
    Advance,
    /// Stop; the input has been fully handled.
    Done,
    /// Feed the same input again, usually to a freshly swapped-in state.
    Hold,
}

pub type Transition<In, Out, Error> = (
    Option<Out>,
    Option<Box<dyn State<In, Out, Error>>>,
    SequenceAction,
);

/// One state of a character-at-a-time scanner. `None` input means end of
/// input; a state may emit an output, replace itself, or both.
pub trait State<In, Out, Error> {
    fn handle(&mut self, c: Option<In>) -> Result<Transition<In, Out, Error>, Error>;
}

/// Runs a state machine from `start` over `input` until a state reports
/// [`SequenceAction::Done`].
pub fn drive<In: Copy, Out, Error>(
    start: Box<dyn State<In, Out, Error>>,
    input: &[In],
) -> Result<Vec<Out>, Error> {
    let mut state = start;
    let mut outputs = Vec::new();
    let mut i = 0;

    loop {
        let (output, new_state, action) = state.handle(input.get(i).copied())?;
        if let Some(new_state) = new_state {
            state = new_state;
        }
        if let Some(output) = output {
            outputs.push(output);
        }
        match action {
            SequenceAction::Advance => i += 1,
            SequenceAction::Done => break,
            SequenceAction::Hold => {}
        }
    }

    Ok(outputs)
}
