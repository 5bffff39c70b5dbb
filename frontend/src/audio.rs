use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, OscillatorType};

const CLICK_FREQUENCY_HZ: f32 = 880.0;
const CLICK_GAIN: f32 = 0.08;
const CLICK_SECONDS: f64 = 0.03;

/// Short click played each time a segment passes the pointer.
///
/// The audio context is owned by the widget and only created from a user
/// gesture, since browsers refuse to start audio otherwise.
pub struct TickSound {
    context: Option<AudioContext>,
    enabled: bool,
    unavailable: bool,
}

impl TickSound {
    pub fn new(enabled: bool) -> Self {
        Self {
            context: None,
            enabled,
            unavailable: false,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Creates or resumes the audio context. Call from a click or key handler.
    pub fn prime(&mut self) {
        if !self.enabled || self.unavailable {
            return;
        }
        if let Some(context) = &self.context {
            if context.state() == AudioContextState::Suspended {
                if let Err(err) = context.resume() {
                    debug!("Audio resume failed: {:?}", err);
                }
            }
            return;
        }
        match AudioContext::new() {
            Ok(context) => self.context = Some(context),
            Err(err) => {
                debug!("Audio unavailable: {:?}", err);
                self.unavailable = true;
            }
        }
    }

    pub fn click(&self) {
        if !self.enabled {
            return;
        }
        if let Some(context) = &self.context {
            if let Err(err) = play_click(context) {
                debug!("Tick sound failed: {:?}", err);
            }
        }
    }
}

impl Drop for TickSound {
    fn drop(&mut self) {
        if let Some(context) = self.context.take() {
            if let Err(err) = context.close() {
                debug!("Audio close failed: {:?}", err);
            }
        }
    }
}

fn play_click(context: &AudioContext) -> Result<(), JsValue> {
    let oscillator = context.create_oscillator()?;
    let gain = context.create_gain()?;
    let now = context.current_time();

    oscillator.set_type(OscillatorType::Square);
    oscillator.frequency().set_value(CLICK_FREQUENCY_HZ);
    gain.gain().set_value_at_time(CLICK_GAIN, now)?;
    gain.gain().exponential_ramp_to_value_at_time(0.001, now + CLICK_SECONDS)?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&context.destination())?;
    oscillator.start_with_when(now)?;
    oscillator.stop_with_when(now + CLICK_SECONDS)?;
    Ok(())
}
