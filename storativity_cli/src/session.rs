//! Interactive session state.
//!
//! Holds the current selections and the last chart drawn. Under
//! [`RefreshPolicy::Live`] every accepted change recomputes immediately; under
//! [`RefreshPolicy::OnUpdate`] changes are staged and the previous chart stays
//! on screen until `update`.

use clap::ValueEnum;
use storativity_core::{CalcError, CalcResult, StorativityCalculator, StorativityInput, StorativityResult, Thickness};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RefreshPolicy {
    /// Recompute on every change
    Live,
    /// Recompute only on `update`
    #[default]
    OnUpdate,
}

pub const HELP: &str = "\
Commands:
  mode <S|Ss|Sw>                    quantity to plot
  alpha <min|avg|max>               alpha table column
  porosity <min|mid|max>            porosity table column
  density <potable|sea_water|brine> pore water
  thickness <1|2|4|8|15|30>         aquifer thickness (m)
  update                            redraw with the current selections
  show                              redraw the last chart
  tables                            print the lookup tables
  json                              print the last result as JSON
  help                              this text
  quit                              leave";

/// What the front end should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Draw this result
    Chart(StorativityResult),
    /// Selection accepted but not yet drawn
    Staged(String),
    /// Print the lookup tables
    Tables,
    /// Print this text
    Text(String),
    Quit,
}

pub struct Session {
    calc: StorativityCalculator,
    policy: RefreshPolicy,
    pending: StorativityInput,
    shown: StorativityResult,
}

impl Session {
    pub fn new(calc: StorativityCalculator, input: StorativityInput, policy: RefreshPolicy) -> Self {
        let shown = calc.calculate(&input);
        Session {
            calc,
            policy,
            pending: input,
            shown,
        }
    }

    pub fn calculator(&self) -> &StorativityCalculator {
        &self.calc
    }

    /// Result currently on screen
    pub fn shown(&self) -> &StorativityResult {
        &self.shown
    }

    /// True when staged selections differ from the chart on screen
    pub fn is_stale(&self) -> bool {
        self.pending != self.shown.input
    }

    /// Apply one command line. Invalid values leave the session unchanged.
    pub fn handle(&mut self, line: &str) -> CalcResult<Reply> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Reply::Text(String::new()));
        };
        let arg = words.collect::<Vec<_>>().join(" ");

        match command.to_lowercase().as_str() {
            "mode" | "alpha" | "porosity" | "density" | "thickness" => {
                let field = command.to_lowercase();
                let next = with_selection(self.pending, &field, &arg)?;
                self.select(next, &field, &arg)
            }
            "update" => Ok(self.redraw()),
            "show" => Ok(Reply::Chart(self.shown)),
            "tables" => Ok(Reply::Tables),
            "json" => Ok(Reply::Text(serde_json::to_string_pretty(&self.shown)?)),
            "help" | "?" => Ok(Reply::Text(HELP.to_string())),
            "quit" | "exit" | "q" => Ok(Reply::Quit),
            other => Err(CalcError::invalid_input("command", other, "unknown command, type 'help'")),
        }
    }

    fn select(&mut self, next: StorativityInput, field: &str, value: &str) -> CalcResult<Reply> {
        self.pending = next;
        debug!(field, value, "selection changed");
        match self.policy {
            RefreshPolicy::Live => Ok(self.redraw()),
            RefreshPolicy::OnUpdate => Ok(Reply::Staged(format!(
                "{field} = {value} (type 'update' to redraw)"
            ))),
        }
    }

    fn redraw(&mut self) -> Reply {
        self.shown = self.calc.calculate(&self.pending);
        Reply::Chart(self.shown)
    }
}

fn with_selection(mut input: StorativityInput, field: &str, value: &str) -> CalcResult<StorativityInput> {
    match field {
        "mode" => input.mode = value.parse()?,
        "alpha" => input.alpha = value.parse()?,
        "porosity" => input.porosity = value.parse()?,
        "density" => input.density = value.parse()?,
        "thickness" => input.thickness = value.parse::<Thickness>()?,
        _ => return Err(CalcError::invalid_input("field", field, "not a selectable parameter")),
    }
    Ok(input)
}
