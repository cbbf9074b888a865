//! Interactive session driving the food web engine
//!
//! A session owns one [`FoodWeb`] and the mode flags for a run. It reads
//! whitespace-separated tokens, so names and index pairs may be split
//! across lines freely. End of input closes whichever phase is active.

use std::io::{BufRead, Write};

use foodweb_core::FoodWeb;

use crate::input::Tokens;
use crate::output::{write_characteristics, write_web, OutputFormat};

const SEPARATOR: &str = "--------------------------------\n";
const DONE: &str = "DONE";

/// Program modes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modes {
    /// Stop after analyzing the initial web
    pub basic: bool,
    /// Print the web after every mutation
    pub debug: bool,
    /// Suppress prompts
    pub quiet: bool,
}

/// One run of the food web application
pub struct Session<R, W> {
    web: FoodWeb,
    modes: Modes,
    format: OutputFormat,
    input: Tokens<R>,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, modes: Modes, format: OutputFormat) -> Self {
        Self {
            web: FoodWeb::new(),
            modes,
            format,
            input: Tokens::new(input),
            out,
        }
    }

    pub fn web(&self) -> &FoodWeb {
        &self.web
    }

    /// Run every phase: settings, initial build, analysis, modification
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.print_settings()?;
        writeln!(self.out, "Welcome to the Food Web Application\n")?;
        writeln!(self.out, "{}", SEPARATOR)?;

        writeln!(self.out, "Building the initial food web...")?;
        self.read_organisms()?;
        self.read_relations()?;
        writeln!(self.out)?;

        writeln!(self.out, "{}", SEPARATOR)?;
        writeln!(self.out, "Initial food web complete.")?;
        writeln!(self.out, "Displaying characteristics for the initial food web...")?;
        write_characteristics(&mut self.out, &self.web, false, self.format)?;

        if !self.modes.basic {
            writeln!(self.out, "{}", SEPARATOR)?;
            writeln!(self.out, "Modifying the food web...\n")?;
            self.modify()?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn print_settings(&mut self) -> anyhow::Result<()> {
        let on_off = |mode: bool| if mode { "ON" } else { "OFF" };
        writeln!(self.out, "Program Settings:")?;
        writeln!(self.out, "  basic mode = {}", on_off(self.modes.basic))?;
        writeln!(self.out, "  debug mode = {}", on_off(self.modes.debug))?;
        writeln!(self.out, "  quiet mode = {}", on_off(self.modes.quiet))?;
        writeln!(self.out)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<()> {
        if !self.modes.quiet {
            write!(self.out, "{}", text)?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn debug_dump(&mut self, action: &str) -> anyhow::Result<()> {
        if self.modes.debug {
            writeln!(self.out, "DEBUG MODE - {}:", action)?;
            write_web(&mut self.out, &self.web, self.format)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Read organism names until `DONE`
    fn read_organisms(&mut self) -> anyhow::Result<()> {
        loop {
            self.prompt("Enter the name for an organism in the web (or enter DONE): ")?;
            let name = self.input.next_token()?;
            self.prompt("\n")?;
            match name {
                Some(name) if name != DONE => {
                    self.web.add_organism(name);
                    self.debug_dump("added an organism")?;
                }
                _ => break,
            }
        }
        self.prompt("\n")
    }

    /// Read predator/prey pairs until one is not a valid new relation
    fn read_relations(&mut self) -> anyhow::Result<()> {
        loop {
            self.relation_prompt()?;
            let pair = self.read_pair()?;
            self.prompt("\n")?;

            let Some((predator, prey)) = pair else { break };
            let count = self.web.organism_count();
            if predator >= count || prey >= count || predator == prey {
                break;
            }
            // Repeats of an existing pair are accepted and ignored
            if let Err(e) = self.web.add_relation(predator, prey) {
                tracing::info!("Relation not added: {}", e);
            }
            self.debug_dump("added a relation")?;
        }
        Ok(())
    }

    fn relation_prompt(&mut self) -> anyhow::Result<()> {
        self.prompt("Enter the pair of indices for a predator/prey relation.\n")?;
        self.prompt("Enter any invalid index when done (-1 2, 0 -9, 3 3, etc.).\n")?;
        self.prompt("The format is <predator index> <prey index>: ")
    }

    /// Two indices, or `None` if either is missing or not a valid index
    fn read_pair(&mut self) -> anyhow::Result<Option<(usize, usize)>> {
        let first = self.input.next_index()?;
        let second = match first {
            Some(_) => self.input.next_index()?,
            None => None,
        };
        Ok(match (first, second) {
            (Some(Some(a)), Some(Some(b))) => Some((a, b)),
            _ => None,
        })
    }

    fn modify(&mut self) -> anyhow::Result<()> {
        loop {
            self.prompt(concat!(
                "Web modification options:\n",
                "   o = add a new organism (expansion)\n",
                "   r = add a new predator/prey relation (supplementation)\n",
                "   x = remove an organism (extinction)\n",
                "   p = print the updated food web\n",
                "   d = display ALL characteristics for the updated food web\n",
                "   q = quit\n",
                "Enter a character (o, r, x, p, d, or q): ",
            ))?;
            let Some(opt) = self.input.next_char()? else {
                tracing::debug!("Input ended in the modification menu");
                return Ok(());
            };
            self.prompt("\n\n")?;

            match opt {
                'o' => {
                    if !self.expansion()? {
                        return Ok(());
                    }
                }
                'x' => self.extinction()?,
                'r' => self.supplementation()?,
                'p' => {
                    writeln!(self.out, "UPDATED Food Web Predators & Prey:")?;
                    write_web(&mut self.out, &self.web, self.format)?;
                    writeln!(self.out)?;
                }
                'd' => {
                    writeln!(
                        self.out,
                        "Displaying characteristics for the UPDATED food web...\n"
                    )?;
                    write_characteristics(&mut self.out, &self.web, true, self.format)?;
                }
                _ => {}
            }
            writeln!(self.out, "{}", SEPARATOR)?;

            if opt == 'q' {
                return Ok(());
            }
        }
    }

    /// Add an organism; false if input ended before a name arrived
    fn expansion(&mut self) -> anyhow::Result<bool> {
        self.prompt("EXPANSION - enter the name for the new organism: ")?;
        let Some(name) = self.input.next_token()? else {
            return Ok(false);
        };
        self.prompt("\n")?;

        let index = self.web.add_organism(name);
        writeln!(self.out, "Species Expansion: {}", self.web.name_of(index)?)?;
        writeln!(self.out)?;
        self.debug_dump("added an organism")?;
        Ok(true)
    }

    fn extinction(&mut self) -> anyhow::Result<()> {
        self.prompt("EXTINCTION - enter the index for the extinct organism: ")?;
        let index = self.input.next_index()?.flatten();
        self.prompt("\n")?;

        match index.map(|i| self.web.remove_organism(i)) {
            Some(Ok(removed)) => writeln!(self.out, "Species Extinction: {}", removed.name())?,
            Some(Err(e)) => {
                tracing::info!("Extinction rejected: {}", e);
                writeln!(self.out, "Invalid index for species extinction")?;
            }
            None => writeln!(self.out, "Invalid index for species extinction")?,
        }
        writeln!(self.out)?;
        self.debug_dump("removed an organism")?;
        Ok(())
    }

    fn supplementation(&mut self) -> anyhow::Result<()> {
        self.prompt("SUPPLEMENTATION - enter the pair of indices for the new predator/prey relation.\n")?;
        self.prompt("The format is <predator index> <prey index>: ")?;
        let pair = self.read_pair()?;
        self.prompt("\n")?;

        if let Some((predator, prey)) = pair {
            match self.web.add_relation(predator, prey) {
                Ok(()) => writeln!(
                    self.out,
                    "New Food Source: {} eats {}",
                    self.web.name_of(predator)?,
                    self.web.name_of(prey)?
                )?,
                Err(e) => tracing::info!("Relation rejected: {}", e),
            }
        }
        writeln!(self.out)?;
        self.debug_dump("added a relation")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str, modes: Modes) -> (FoodWeb, String) {
        let mut out = Vec::new();
        let web = {
            let mut session = Session::new(input.as_bytes(), &mut out, modes, OutputFormat::Text);
            session.run().unwrap();
            session.web().clone()
        };
        (web, String::from_utf8(out).unwrap())
    }

    fn quiet() -> Modes {
        Modes {
            quiet: true,
            ..Modes::default()
        }
    }

    #[test]
    fn test_build_phase() {
        let (web, out) = run_session("Grass Rabbit Fox DONE 1 0 2 1 1 0 -1 -1 q", quiet());

        assert_eq!(web.organism_count(), 3);
        assert_eq!(web.prey_of(1).unwrap(), &[0]);
        assert_eq!(web.prey_of(2).unwrap(), &[1]);
        assert!(out.contains("  quiet mode = ON\n"));
        assert!(out.contains("Initial food web complete."));
        assert!(!out.contains("Enter the name"));
    }

    #[test]
    fn test_same_pair_ends_relation_entry() {
        let (web, _) = run_session("A B DONE 0 1 1 1 1 0 q", quiet());

        assert_eq!(web.prey_of(0).unwrap(), &[1]);
        assert!(web.prey_of(1).unwrap().is_empty());
    }

    #[test]
    fn test_prompts_shown_when_not_quiet() {
        let (_, out) = run_session("A DONE -1 0 q", Modes::default());

        assert!(out.contains("Enter the name for an organism in the web (or enter DONE): "));
        assert!(out.contains("The format is <predator index> <prey index>: "));
        assert!(out.contains("Enter a character (o, r, x, p, d, or q): "));
    }

    #[test]
    fn test_basic_mode_skips_menu() {
        let modes = Modes {
            basic: true,
            quiet: true,
            ..Modes::default()
        };
        let (web, out) = run_session("A B DONE 0 1 -1 -1 x 0", modes);

        assert_eq!(web.organism_count(), 2);
        assert!(!out.contains("Modifying the food web"));
    }

    #[test]
    fn test_expansion_and_supplementation() {
        let (web, out) = run_session("Grass DONE -1 -1 o Deer r 1 0 r 1 0 q", quiet());

        assert_eq!(web.name_of(1).unwrap(), "Deer");
        assert_eq!(web.prey_of(1).unwrap(), &[0]);
        assert!(out.contains("Species Expansion: Deer\n"));
        assert_eq!(out.matches("New Food Source: Deer eats Grass").count(), 1);
    }

    #[test]
    fn test_extinction() {
        let input = "Grass Rabbit Fox DONE 1 0 2 1 -1 -1 x 1 x 9 x -3 p q";
        let (web, out) = run_session(input, quiet());

        assert_eq!(web.organism_count(), 2);
        assert!(web.prey_of(1).unwrap().is_empty());
        assert!(out.contains("Species Extinction: Rabbit\n"));
        assert_eq!(out.matches("Invalid index for species extinction").count(), 2);
        assert!(out.contains("UPDATED Food Web Predators & Prey:\n  (0) Grass\n  (1) Fox\n"));
    }

    #[test]
    fn test_display_updated() {
        let (_, out) = run_session("A B DONE 0 1 -1 -1 d q", quiet());

        assert!(out.contains("Displaying characteristics for the UPDATED food web..."));
        assert!(out.contains("UPDATED Food Web Heights:\n  A: 1\n  B: 0\n"));
    }

    #[test]
    fn test_debug_mode_dumps_web() {
        let modes = Modes {
            debug: true,
            quiet: true,
            ..Modes::default()
        };
        let (_, out) = run_session("A B DONE 0 1 -1 -1 x 0 q", modes);

        assert!(out.contains("DEBUG MODE - added an organism:\n  (0) A\n"));
        assert!(out.contains("DEBUG MODE - added a relation:\n  (0) A eats B\n  (1) B\n"));
        assert!(out.contains("DEBUG MODE - removed an organism:\n  (0) B\n"));
    }

    #[test]
    fn test_input_end_closes_every_phase() {
        let (web, out) = run_session("Grass Rabbit", quiet());

        assert_eq!(web.organism_count(), 2);
        assert!(out.contains("Modifying the food web..."));
    }

    #[test]
    fn test_unknown_option_is_ignored() {
        let (_, out) = run_session("A DONE -1 -1 z q", quiet());
        assert_eq!(out.matches(SEPARATOR).count(), 5);
    }
}
