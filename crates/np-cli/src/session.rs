//! Interactive resolution session.
//!
//! Wraps the board engine and the dice roller behind a line-oriented
//! command interface. All game rules live in the engine crates; this
//! module only parses intents and renders the state that comes back.

use rand::SeedableRng;
use rand::rngs::StdRng;

use np_board::{BoardState, Phase, RoundResult, Token, TokenOutcome};
use np_dice::{DicePoolConfig, RollResult, roll_pool};

/// One interactive session: a reveal board, a dice pool configuration,
/// and the single RNG both engines draw from.
pub struct Session {
    board: BoardState,
    dice: DicePoolConfig,
    last_roll: Option<RollResult>,
    rng: StdRng,
}

impl Session {
    /// Create a session with a seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self {
            board: BoardState::new(),
            dice: DicePoolConfig::default(),
            last_roll: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Board state, for rendering by the caller.
    #[cfg(test)]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> Result<String, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "ready" => self.do_ready(args),
            "start" => self.do_start(),
            "reveal" => self.do_reveal(args),
            "continue" | "next" => self.do_advance(),
            "board" => Ok(self.render_board()),
            "pool" => self.do_pool(args),
            "roll" => self.do_roll(),
            "status" => Ok(self.render_status()),
            "reset" => {
                self.board.reset();
                Ok("Board reset. Declare successes with 'ready <0-3>', then 'start'.".to_string())
            }
            "help" => Ok(Self::help().to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(format!("unknown command: {other} (try 'help')")),
        }
    }

    fn do_ready(&mut self, args: &[&str]) -> Result<String, String> {
        let pending: u32 = args
            .first()
            .ok_or("usage: ready <0-3>")?
            .parse()
            .map_err(|_| "usage: ready <0-3>".to_string())?;
        self.board
            .set_pending_successes(pending)
            .map_err(|e| e.to_string())?;
        Ok(format!(
            "Bringing {pending} prior success(es) into round {}. Type 'start' to deal the board.",
            self.board.round() + 1
        ))
    }

    fn do_start(&mut self) -> Result<String, String> {
        self.board.start_round(&mut self.rng).map_err(|e| e.to_string())?;
        Ok(format!(
            "--- Round {} ---\n{}",
            self.board.round() + 1,
            self.render_board()
        ))
    }

    fn do_reveal(&mut self, args: &[&str]) -> Result<String, String> {
        let slot: usize = args
            .first()
            .ok_or("usage: reveal <slot>")?
            .parse()
            .map_err(|_| "usage: reveal <slot>".to_string())?;

        let id = slot
            .checked_sub(1)
            .and_then(|i| self.board.tokens().get(i))
            .map(Token::id)
            .ok_or_else(|| format!("no slot {slot} on the board"))?;

        match self.board.reveal(id) {
            None => Ok(format!("Slot {slot} is already face-up; nothing happens.")),
            Some(TokenOutcome::Retry) => Ok(format!(
                "Slot {slot}: retry. Keep going.\n{}",
                self.render_board()
            )),
            Some(outcome) => Ok(format!(
                "Slot {slot}: {outcome}. Round {} is {outcome}.\n{}\nType 'continue' to move on.",
                self.board.round() + 1,
                self.render_board()
            )),
        }
    }

    fn do_advance(&mut self) -> Result<String, String> {
        self.board.advance().map_err(|e| e.to_string())?;
        match self.board.verdict() {
            Some(verdict) => Ok(format!(
                "{}\n{verdict}! ({} of {} rounds good)",
                self.render_history(),
                self.board.good_rounds(),
                np_board::ROUNDS
            )),
            None => Ok(format!(
                "Round {} awaits. Declare successes with 'ready <0-3>', then 'start'.",
                self.board.round() + 1
            )),
        }
    }

    fn do_pool(&mut self, args: &[&str]) -> Result<String, String> {
        if args.len() != 3 {
            return Err("usage: pool <stats> <skills> <bonuses>".to_string());
        }
        let mut values = [0u32; 3];
        for (slot, arg) in values.iter_mut().zip(args) {
            *slot = arg
                .parse()
                .map_err(|_| "usage: pool <stats> <skills> <bonuses>".to_string())?;
        }
        self.dice = DicePoolConfig::new(values[0], values[1], values[2])
            .map_err(|e| e.to_string())?;
        self.last_roll = None;
        Ok(format!("Dice pool set: {}", self.dice))
    }

    fn do_roll(&mut self) -> Result<String, String> {
        let result = roll_pool(&self.dice, &mut self.rng).map_err(|e| e.to_string())?;
        let output = format!("Rolling {}: {result}", self.dice);
        self.last_roll = Some(result);
        Ok(output)
    }

    fn render_board(&self) -> String {
        let tokens = self.board.tokens();
        if tokens.is_empty() {
            return "The board is empty.".to_string();
        }
        let slots: Vec<String> = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| {
                if t.revealed() {
                    format!("{}:{} ({})", i + 1, t.outcome(), t.tier())
                } else {
                    format!("{}:[?]", i + 1)
                }
            })
            .collect();
        format!("Board: {}", slots.join("  "))
    }

    fn render_history(&self) -> String {
        let slots: Vec<String> = self
            .board
            .history()
            .iter()
            .enumerate()
            .map(|(i, r)| match r {
                Some(RoundResult::Good) => format!("round {}: good", i + 1),
                Some(RoundResult::Bad) => format!("round {}: bad", i + 1),
                None => format!("round {}: -", i + 1),
            })
            .collect();
        slots.join(" | ")
    }

    fn render_status(&self) -> String {
        let mut out = format!(
            "Phase: {} (round {})\n",
            self.board.phase(),
            self.board.round() + 1
        );
        out.push_str(&format!("{}\n", self.render_history()));
        if self.board.phase() == Phase::Input {
            out.push_str(&format!(
                "Declared successes: {}\n",
                self.board.pending_successes()
            ));
        }
        out.push_str(&format!("Dice pool: {}\n", self.dice));
        match &self.last_roll {
            Some(roll) => out.push_str(&format!("Last roll: {roll}")),
            None => out.push_str("Last roll: none"),
        }
        out
    }

    fn help() -> &'static str {
        "\
Board commands:
  ready <0-3>         Declare prior successes for this round
  start               Deal and shuffle the round's tokens
  reveal <slot>       Turn over a face-down token
  continue            Leave the round summary, move on
  board               Show the board
  reset               Start the session over

Dice commands:
  pool <s> <k> <b>    Configure stats/skills/bonus dice (0-5 each)
  roll                Roll the exploding d10 pool

  status              Show phase, history, pool, last roll
  help                This text
  quit                Exit"
    }
}
