//! Button machines.
//!
//! A machine has joltage counters and buttons; each button bumps a fixed set
//! of counters by one. Reaching the target joltages with the fewest presses
//! is a minimum-sum problem over one variable per button:
//!
//! ```text
//! counter k:  Σ_{buttons b touching k} presses(b) = joltage(k)
//! ```

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use minsum_search::SearchConfig;

use crate::error::SolveError;
use crate::system::EquationSystem;

/// Errors that reject a machine description.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MachineError {
    /// A button is wired to a counter the machine does not have.
    #[error("button {button} touches counter {counter}, but the machine has {counters} counters")]
    CounterOutOfRange {
        /// Index of the offending button.
        button: usize,
        /// Counter index the button refers to.
        counter: usize,
        /// Number of counters on the machine.
        counters: usize,
    },
}

/// Buttons wired to joltage counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Machine {
    buttons: Vec<Vec<usize>>,
    joltages: Vec<i64>,
}

impl Machine {
    /// Creates a machine from the counters each button touches and the
    /// target joltage of each counter.
    ///
    /// # Errors
    ///
    /// Returns [`MachineError::CounterOutOfRange`] if a button touches a
    /// counter that does not exist.
    pub fn new(buttons: Vec<Vec<usize>>, joltages: Vec<i64>) -> Result<Self, MachineError> {
        for (button, counters) in buttons.iter().enumerate() {
            if let Some(&counter) = counters.iter().find(|&&c| c >= joltages.len()) {
                return Err(MachineError::CounterOutOfRange {
                    button,
                    counter,
                    counters: joltages.len(),
                });
            }
        }
        Ok(Self { buttons, joltages })
    }

    /// Returns the counters touched by each button.
    #[must_use]
    pub fn buttons(&self) -> &[Vec<usize>] {
        &self.buttons
    }

    /// Returns the target joltage of each counter.
    #[must_use]
    pub fn joltages(&self) -> &[i64] {
        &self.joltages
    }

    /// Returns `button0`, `button1`, … one per button.
    #[must_use]
    pub fn button_names(&self) -> Vec<String> {
        (0..self.buttons.len()).map(|i| format!("button{i}")).collect()
    }

    /// Builds the incidence matrix: one row per counter, one column per
    /// button, and the joltage as the last entry.
    #[must_use]
    pub fn joltage_matrix(&self) -> Vec<Vec<i64>> {
        self.joltages
            .iter()
            .enumerate()
            .map(|(counter, &joltage)| {
                let mut row: Vec<i64> = self
                    .buttons
                    .iter()
                    .map(|touched| i64::from(touched.contains(&counter)))
                    .collect();
                row.push(joltage);
                row
            })
            .collect()
    }

    /// Builds the equation system for this machine.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::System`] if the machine has no counters.
    pub fn joltage_system(&self, config: &SearchConfig) -> Result<EquationSystem, SolveError> {
        Ok(EquationSystem::new(&self.button_names(), &self.joltage_matrix())?
            .with_config(config.clone()))
    }

    /// Returns the fewest presses reaching every joltage, or
    /// [`NO_SOLUTION`](crate::NO_SOLUTION).
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] if the system cannot be built or solved.
    pub fn fewest_presses(&self, config: &SearchConfig) -> Result<i64, SolveError> {
        self.joltage_system(config)?.sum_of_variables()
    }
}

/// Sums the fewest presses over every machine.
///
/// Machines are solved in parallel; each solve is single-threaded. The sum
/// saturates, so a machine without a solution turns the total into
/// [`NO_SOLUTION`](crate::NO_SOLUTION).
///
/// # Errors
///
/// Returns the first [`SolveError`] raised by any machine.
pub fn fewest_presses(machines: &[Machine], config: &SearchConfig) -> Result<i64, SolveError> {
    let presses = machines
        .par_iter()
        .map(|machine| machine.fewest_presses(config))
        .collect::<Result<Vec<i64>, SolveError>>()?;

    debug!(machines = machines.len(), "solved machine batch");
    Ok(presses.into_iter().fold(0, i64::saturating_add))
}
