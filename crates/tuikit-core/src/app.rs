//! The render/input loop: [`Model`], [`Driver`], [`Effect`], [`App`].

use crate::error::Result;
use crate::messages::Key;

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A loop-level side-effect returned by [`Model::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Wait for one more keypress before the next redraw, so output written
    /// by an action stays visible.
    Pause,
    /// Signal the loop to stop.
    End,
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// The application model.
pub trait Model {
    /// Called once before the first frame is drawn.
    fn init(&mut self) {}

    /// Process one decoded key, optionally returning a side-effect.
    fn update(&mut self, key: Key) -> Result<Option<Effect>>;

    /// Render the current state as display lines. `width` is the terminal
    /// column count, `0` when unknown.
    fn draw(&self, width: usize) -> Vec<String>;
}

// ---------------------------------------------------------------------------
// Driver trait
// ---------------------------------------------------------------------------

/// Back-end driver (e.g. a terminal).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<()>;

    /// Clear the visible region.
    fn clear(&mut self) -> Result<()>;

    /// Write the rendered lines.
    fn flush(&mut self, lines: &[String]) -> Result<()>;

    /// Current column count, `0` when unavailable.
    fn width(&self) -> usize;

    /// Block until one key event has been read. `Ok(None)` is a decode miss.
    fn read_key(&mut self) -> Result<Option<Key>>;

    /// Clean up / restore the terminal.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
}

impl<M: Model, D: Driver> App<M, D> {
    /// Create a new application from a configuration.
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
        }
    }

    /// Run the loop until the model returns [`Effect::End`] or an error
    /// (including [`Error::Interrupted`](crate::Error::Interrupted)) occurs.
    ///
    /// 1. Initialises the driver, then the model.
    /// 2. Each cycle: clear → draw → flush → read one key → update.
    /// 3. Closes the driver on every exit path.
    pub fn run(&mut self) -> Result<()> {
        self.driver.init()?;
        self.model.init();
        let result = self.run_loop();
        self.driver.close();
        result
    }

    fn run_loop(&mut self) -> Result<()> {
        loop {
            self.driver.clear()?;
            let lines = self.model.draw(self.driver.width());
            self.driver.flush(&lines)?;

            // A decode miss is simply no actionable key this cycle.
            let Some(key) = self.driver.read_key()? else {
                continue;
            };

            match self.model.update(key)? {
                Some(Effect::End) => return Ok(()),
                Some(Effect::Pause) => {
                    self.driver.read_key()?;
                }
                None => {}
            }
        }
    }

    /// The model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The model, mutably.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consume the app, returning the model and driver.
    pub fn into_parts(self) -> (M, D) {
        (self.model, self.driver)
    }
}
