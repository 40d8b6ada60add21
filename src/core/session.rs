use crate::core::limerick::render;
use crate::core::prompt::{ask_name, ask_rating, ask_yes_no, Console};
use crate::core::rhyme::RhymeClient;
use crate::core::selector::pick_one;
use crate::core::syllable::derive_key;
use crate::domain::model::SessionState;
use crate::domain::ports::{NounSource, RhymeSource};
use crate::utils::error::{LimerickError, Result};
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

pub const WELCOME: &str = "This is the Personalized Limerick Generator (PLG). \
Enter your name to read a limerick unique to you!";
pub const NO_MATCH: &str = "Sorry! Not able to find a close enough match.";
pub const SERVICE_UNAVAILABLE: &str = "Sorry! Unable to reach the rhyme service right now.";
pub const RETRY_PROMPT: &str = "Would you like to try with a different spelling? (Y/N) ";
pub const LIKED_PROMPT: &str = "Glad you liked it! Give it another spin? (Y/N) ";
pub const DISLIKED_PROMPT: &str = "That's too bad! Do you want to give it another spin? (Y/N) ";

/// Drives rounds of name, rhyme lookup, limerick and feedback until the
/// player declines to continue or input runs out.
pub struct Session<S: RhymeSource, N: NounSource, R, W> {
    client: RhymeClient<S, N>,
    console: Console<R, W>,
    rng: StdRng,
    state: SessionState,
}

impl<S, N, R, W> Session<S, N, R, W>
where
    S: RhymeSource,
    N: NounSource,
    R: BufRead,
    W: Write,
{
    pub fn new(client: RhymeClient<S, N>, console: Console<R, W>, rng: StdRng) -> Self {
        Self {
            client,
            console,
            rng,
            state: SessionState::new(),
        }
    }

    /// Runs until the player says no, then prints the farewell and returns
    /// the final state. End of input is treated as "no".
    pub async fn run(mut self) -> Result<SessionState> {
        self.console.say(WELCOME)?;

        while self.state.keep_playing {
            match self.round().await {
                Ok(again) => self.state.keep_playing = again,
                Err(LimerickError::InputClosed) => {
                    tracing::debug!("Input closed, ending session");
                    self.state.keep_playing = false;
                    self.console.say("")?;
                }
                Err(e) => return Err(e),
            }
        }

        self.farewell()?;
        Ok(self.state)
    }

    /// One pass through the loop. Returns whether to play again.
    async fn round(&mut self) -> Result<bool> {
        let name = ask_name(&mut self.console)?;
        self.state.last_name = Some(name.clone());

        let key = derive_key(&name);
        tracing::debug!("Rhyme key for {} is '{}'", name, key);

        let candidates = match self.client.fetch_candidates(&key).await {
            Ok(candidates) => candidates,
            Err(e) if e.is_network() => {
                tracing::warn!("Rhyme lookup failed: {}", e);
                self.console.say(SERVICE_UNAVAILABLE)?;
                return ask_yes_no(&mut self.console, RETRY_PROMPT);
            }
            Err(e) => return Err(e),
        };

        let Some(rhyme) = pick_one(&mut self.rng, &candidates) else {
            self.console.say(NO_MATCH)?;
            return ask_yes_no(&mut self.console, RETRY_PROMPT);
        };
        tracing::debug!("Chose '{}' from {} candidates", rhyme, candidates.len());

        let limerick = render(&mut self.rng, &name, rhyme);
        self.console.say("")?;
        self.console.say(&limerick.to_string())?;
        self.state.rounds_played += 1;

        self.collect_feedback()
    }

    fn collect_feedback(&mut self) -> Result<bool> {
        self.console.say("")?;
        let score = ask_rating(&mut self.console)?;
        tracing::info!("Limerick rated {}/5", score);

        let prompt = if score >= 3 { LIKED_PROMPT } else { DISLIKED_PROMPT };
        ask_yes_no(&mut self.console, prompt)
    }

    fn farewell(&mut self) -> Result<()> {
        match &self.state.last_name {
            Some(name) => self
                .console
                .say(&format!("Thanks for trying the PLG, {}!", name)),
            None => self.console.say("Thanks for trying the PLG!"),
        }
    }
}
