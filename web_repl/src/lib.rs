use calcula::{AngleMode, Session, Viewport};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub struct State {
    session: Session,
}

#[wasm_bindgen]
pub fn setup() -> State {
    console_error_panic_hook::set_once();

    State {
        session: Session::new(AngleMode::Deg),
    }
}

/// Evaluates one line, returning the text to display: empty for blank
/// input, `Error` for anything that could not be evaluated.
#[wasm_bindgen]
pub fn run(code: &str, state: &mut State) -> String {
    state.session.evaluate(code).to_string()
}

#[wasm_bindgen]
pub fn set_degrees(degrees: bool, state: &mut State) {
    state.session.set_angle_mode(if degrees {
        AngleMode::Deg
    } else {
        AngleMode::Rad
    });
}

/// Flips the angle mode and returns its new label.
#[wasm_bindgen]
pub fn toggle_angle_mode(state: &mut State) -> String {
    state.session.toggle_angle_mode().to_string()
}

/// Samples `code` over `width` columns, returning `[column, y, column, y, ...]`
/// for the canvas to join up. Columns without a value are left out, so a
/// gap in columns is a gap in the curve. An expression that does not
/// compile is an error carrying the message to show.
#[wasm_bindgen]
pub fn plot(code: &str, width: u32, scale: f64, state: &State) -> Result<Vec<f64>, String> {
    let curve = state
        .session
        .plot(code, Viewport::new(width, scale))
        .map_err(|error| error.to_string())?;
    Ok(curve
        .samples()
        .flat_map(|(column, y)| [column as f64, y])
        .collect())
}

#[wasm_bindgen]
pub fn clear(state: &mut State) {
    state.session.clear();
}
