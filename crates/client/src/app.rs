//! Line-based duel frontend.
//!
//! Walks one session through hero and enemy setup, then reads one command
//! per line until the fight ends. Unknown catalog names re-prompt; any other
//! error aborts the client.

use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use arena_core::arena::FIGHT_STARTED;
use arena_core::{CombatAction, GameError};
use arena_runtime::{FighterSnapshot, FighterSpec, RuntimeError, SessionId, SessionRegistry};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

const HELP: &str = "commands: attack | skill | pass | end | status | help | quit";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Act(CombatAction),
    End,
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if let Ok(action) = CombatAction::from_str(input) {
            return Ok(Self::Act(action));
        }
        match input.to_ascii_lowercase().as_str() {
            "end" => Ok(Self::End),
            "status" | "s" => Ok(Self::Status),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Next {
    Again,
    Quit,
}

#[derive(Clone, Copy)]
enum Role {
    Hero,
    Enemy,
}

impl Role {
    fn label(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Enemy => "enemy",
        }
    }
}

pub struct App<R, W> {
    registry: SessionRegistry,
    session: SessionId,
    lines: Lines<R>,
    out: W,
}

impl<R, W> App<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(mut registry: SessionRegistry, input: R, out: W) -> Self {
        let session = registry.open_session();
        Self {
            registry,
            session,
            lines: input.lines(),
            out,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        loop {
            if !self.setup().await? {
                break;
            }
            if self.fight().await? == Next::Quit {
                break;
            }
        }
        self.registry.close_session(self.session);
        Ok(())
    }

    /// Returns false if input ran out before both fighters were chosen.
    async fn setup(&mut self) -> Result<bool> {
        self.registry.begin_setup(self.session)?;

        let listing = self.registry.catalog_listing();
        writeln!(self.out, "Classes: {}", listing.classes.join(", "))?;
        writeln!(self.out, "Weapons: {}", listing.weapons.join(", "))?;
        writeln!(self.out, "Armors:  {}", listing.armors.join(", "))?;

        for role in [Role::Hero, Role::Enemy] {
            if !self.choose(role).await? {
                return Ok(false);
            }
        }

        writeln!(self.out, "{FIGHT_STARTED}")?;
        self.print_status()?;
        writeln!(self.out, "{HELP}")?;
        Ok(true)
    }

    async fn choose(&mut self, role: Role) -> Result<bool> {
        loop {
            let Some(spec) = self.prompt_fighter(role).await? else {
                return Ok(false);
            };

            let chosen = match role {
                Role::Hero => self.registry.choose_hero(self.session, spec),
                Role::Enemy => self.registry.choose_enemy(self.session, spec),
            };
            match chosen {
                Ok(()) => return Ok(true),
                Err(err @ RuntimeError::Catalog(_)) if err.severity().is_recoverable() => {
                    writeln!(self.out, "{err}, try again")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    async fn prompt_fighter(&mut self, role: Role) -> Result<Option<FighterSpec>> {
        writeln!(self.out, "Choose the {}:", role.label())?;
        let mut fields = Vec::with_capacity(4);
        for field in ["name", "class", "weapon", "armor"] {
            match self.prompt(&format!("  {field}: ")).await? {
                Some(value) => fields.push(value),
                None => return Ok(None),
            }
        }

        let [name, class, weapon, armor]: [String; 4] = match fields.try_into() {
            Ok(fields) => fields,
            Err(_) => return Ok(None),
        };
        Ok(Some(FighterSpec::new(name, class, weapon, armor)))
    }

    async fn fight(&mut self) -> Result<Next> {
        loop {
            let Some(line) = self.prompt("> ").await? else {
                return Ok(Next::Quit);
            };

            match line.parse::<Command>() {
                Ok(Command::Act(action)) => {
                    let report = self.registry.play(self.session, action)?;
                    writeln!(self.out, "{report}")?;
                    if report.outcome.is_some() {
                        return self.ask_again().await;
                    }
                    if !report.is_rejected() {
                        self.print_status()?;
                    }
                }
                Ok(Command::End) => {
                    let farewell = self.registry.end_fight(self.session)?;
                    writeln!(self.out, "{farewell}")?;
                    return self.ask_again().await;
                }
                Ok(Command::Status) => self.print_status()?,
                Ok(Command::Help) => writeln!(self.out, "{HELP}")?,
                Ok(Command::Quit) => {
                    self.registry.end_fight(self.session)?;
                    return Ok(Next::Quit);
                }
                Err(()) => writeln!(self.out, "unknown command '{}'; {HELP}", line.trim())?,
            }
        }
    }

    async fn ask_again(&mut self) -> Result<Next> {
        let answer = self.prompt("Play again? [y/N] ").await?;
        let again = answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y"));
        Ok(if again { Next::Again } else { Next::Quit })
    }

    fn print_status(&mut self) -> Result<()> {
        let snapshot = self.registry.snapshot(self.session)?;
        for fighter in [&snapshot.hero, &snapshot.enemy].into_iter().flatten() {
            writeln!(self.out, "{}", status_line(fighter))?;
        }
        Ok(())
    }

    async fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let line = self.lines.next_line().await?;
        Ok(line.map(|l| l.trim().to_owned()))
    }
}

fn status_line(fighter: &FighterSnapshot) -> String {
    let skill = if fighter.skill_used { "used" } else { "ready" };
    format!(
        "{} the {} | health {:.1}/{:.1} | stamina {:.1}/{:.1} | {} ({})",
        fighter.name,
        fighter.class,
        fighter.health,
        fighter.max_health,
        fighter.stamina,
        fighter.max_stamina,
        fighter.skill,
        skill
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arena_content::ContentFactory;
    use arena_core::GameConfig;
    use tokio::io::BufReader;

    use super::*;

    fn registry() -> SessionRegistry {
        let catalog = ContentFactory::bundled().load_catalog().unwrap();
        SessionRegistry::new(Arc::new(catalog), GameConfig::default())
            .unwrap()
            .with_seed(21)
    }

    async fn play(script: &str) -> String {
        let mut out = Vec::new();
        let input = BufReader::new(script.as_bytes());
        App::new(registry(), input, &mut out).run().await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!("attack".parse(), Ok(Command::Act(CombatAction::Attack)));
        assert_eq!(" Skill ".parse(), Ok(Command::Act(CombatAction::UseSkill)));
        assert_eq!("pass".parse(), Ok(Command::Act(CombatAction::PassTurn)));
        assert_eq!("END".parse(), Ok(Command::End));
        assert_eq!("q".parse(), Ok(Command::Quit));
        assert_eq!("dance".parse::<Command>(), Err(()));
    }

    #[tokio::test]
    async fn scripted_fight_reprompts_unknown_names() {
        let output = play(concat!(
            "Aria\nWarrior\nsword\nplate\n",
            "Bandit\nWizard\nknife\nt-shirt\n",
            "Bandit\nThief\nknife\nt-shirt\n",
            "attack\n",
            "dance\n",
            "end\n",
            "n\n",
        ))
        .await;

        assert!(output.contains("unknown class 'Wizard', try again"));
        assert!(output.contains("The fight has begun!"));
        assert!(output.contains("Aria, using sword"));
        assert!(output.contains("unknown command 'dance'"));
        assert!(output.contains("The fight is over!"));
    }

    #[tokio::test]
    async fn eof_during_setup_exits_cleanly() {
        let output = play("Aria\nWarrior\n").await;
        assert!(output.contains("Choose the hero:"));
        assert!(!output.contains("The fight has begun!"));
    }

    #[test]
    fn status_line_shows_vitals() {
        let fighter = FighterSnapshot {
            name: "Aria".into(),
            class: "Warrior".into(),
            weapon: "sword".into(),
            armor: "plate".into(),
            health: 52.0,
            max_health: 60.0,
            stamina: 25.5,
            max_stamina: 30.0,
            skill: "Power Thrust".into(),
            skill_used: true,
        };

        assert_eq!(
            status_line(&fighter),
            "Aria the Warrior | health 52.0/60.0 | stamina 25.5/30.0 | Power Thrust (used)"
        );
    }
}
