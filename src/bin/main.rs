use crossterm::{
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
    cursor::MoveTo,
};
use ecopal_core::config::EcoPalConfig;
use ecopal_core::core::engine::{SendOutcome, TickEvent};
use ecopal_core::core::knowledge::sample_questions;
use ecopal_core::core::types::{Message, Sender};
use ecopal_core::learning::display_name;
use ecopal_core::persistence::FileStore;
use ecopal_core::quiz::QuizSession;
use ecopal_core::simulation::{CarbonTracker, GameState, SolarVillage, CHALLENGE_COMPLETED};
use ecopal_core::{EcoPalEngine, EcoPalError};
use std::io::{stdin, stdout, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> ecopal_core::Result<()> {
    let config = EcoPalConfig::load()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let store = FileStore::new(&config.storage_dir);
    let mut engine = EcoPalEngine::open(store, config.clone())?;

    print_ui(&engine)?;

    loop {
        print!("\n{} ", ">".green().bold());
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" | "/exit" => break,
            "/topics" => print_recommendations(&engine),
            "/profile" => print_profile(&engine),
            "/quiz" => run_quiz()?,
            "/game" => run_game()?,
            "/reset" => {
                engine.reset()?;
                println!("{}", "Profile and conversation cleared.".yellow());
                println!("{}", engine.greeting());
            }
            s if s.starts_with(':') && s.len() > 1 => {
                // Pick a sample question with :1, :2 etc
                if let Ok(n) = s[1..].parse::<usize>() {
                    if let Some(question) = n.checked_sub(1).and_then(|i| sample_questions().get(i)) {
                        println!("{} {}", "You:".cyan().bold(), question);
                        converse(&mut engine, question)?;
                    }
                }
            }
            s => converse(&mut engine, s)?,
        }
    }

    println!("\n{}", "Goodbye! Your progress has been saved. 🌱".green());
    Ok(())
}

/// Sends one message and waits out the simulated thinking delay.
fn converse(engine: &mut EcoPalEngine<FileStore>, text: &str) -> ecopal_core::Result<()> {
    match engine.send(text, Instant::now()) {
        Ok(SendOutcome::Ignored) => return Ok(()),
        Ok(SendOutcome::Scheduled(_)) => {}
        Err(EcoPalError::ReplyPending) => {
            println!("{}", "EcoPal is still thinking...".dim());
            return Ok(());
        }
        Err(e) => return Err(e),
    }

    while let Some(deadline) = engine.next_deadline() {
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        for event in engine.tick(Instant::now())? {
            match event {
                TickEvent::TypingShown => {
                    print!("{}", "EcoPal is typing...".dim());
                    stdout().flush()?;
                }
                TickEvent::ReplyDelivered(message) => {
                    print!("\r{}\r", " ".repeat(20));
                    print_message(&message);
                }
            }
        }
    }
    Ok(())
}

fn print_ui(engine: &EcoPalEngine<FileStore>) -> ecopal_core::Result<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "EcoPal - your environmental learning companion".green().bold());
    println!("---------------------------------------------------------------");
    println!("Ask anything, or pick a question with ':1', ':2'.");
    println!("Commands: /topics /profile /quiz /game /reset, 'exit' to save and quit.\n");

    for (i, question) in sample_questions().iter().enumerate() {
        println!("  :{}: {}", i + 1, question);
    }
    println!();

    for message in engine.messages() {
        print_message(message);
    }
    Ok(())
}

fn print_message(message: &Message) {
    let time = message.timestamp.with_timezone(&chrono::Local).format("%H:%M");
    match message.sender {
        Sender::User => println!("{} {} {}", time.to_string().dim(), "You:".cyan().bold(), message.content),
        Sender::Companion => println!("{} {} {}", time.to_string().dim(), "EcoPal:".green().bold(), message.content),
    }
}

fn print_recommendations(engine: &EcoPalEngine<FileStore>) {
    println!("{}", "Topics to explore next:".bold());
    for topic in engine.recommended_topics() {
        println!("  - {}", display_name(topic));
    }
}

fn print_profile(engine: &EcoPalEngine<FileStore>) {
    let profile = engine.profile();
    println!("{}", "Your learning profile".bold());
    println!("  Level:     {}", profile.experience_level.as_str());
    println!("  Questions: {}", profile.total_questions);
    println!("  Sessions:  {}", profile.total_sessions);
    println!("  Streak:    {} day(s)", profile.learning_streak);
    if !profile.favorite_topics.is_empty() {
        let favorites: Vec<&str> = profile.favorite_topics.iter().map(|t| display_name(t)).collect();
        println!("  Favorites: {}", favorites.join(", "));
    }
}

fn run_quiz() -> ecopal_core::Result<()> {
    let mut session = QuizSession::greenhouse();
    println!("{}", "Greenhouse Effect Quiz".green().bold());

    while let Some(question) = session.current_question() {
        println!("\nQuestion {}/{}: {}", session.position() + 1, session.len(), question.question);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option.text);
        }
        print!("{} ", "answer>".green());
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            return Ok(());
        }
        let Some(choice) = input.trim().parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
            println!("Please enter a number between 1 and {}.", question.options.len());
            continue;
        };
        match session.answer(choice) {
            Ok(feedback) if feedback.correct => println!("{} {}", "Correct!".green().bold(), feedback.explanation),
            Ok(feedback) => println!("{} {}", "Not quite.".red().bold(), feedback.explanation),
            Err(EcoPalError::InvalidOption { available, .. }) => {
                println!("Please enter a number between 1 and {available}.");
            }
            Err(e) => return Err(e),
        }
    }

    println!(
        "\nYou got {} out of {} correct ({}%).",
        session.correct_answers(),
        session.len(),
        session.score_percent()
    );
    if session.passed() {
        println!("{}", "Module complete! 🎉".green().bold());
    } else {
        println!("Score 80% or more to complete the module. Try again!");
    }
    Ok(())
}

fn prompt(label: &str) -> ecopal_core::Result<Option<String>> {
    print!("{} ", label.green());
    stdout().flush()?;
    let mut input = String::new();
    if stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn run_game() -> ecopal_core::Result<()> {
    println!("{}", "Pick a simulation:".bold());
    println!("  1) Build your solar village");
    println!("  2) Daily carbon tracker");
    match prompt("game>")?.as_deref() {
        Some("1") => play_village(),
        Some("2") => play_tracker(),
        _ => Ok(()),
    }
}

fn print_state(state: &GameState, extra: &str) {
    println!(
        "Progress {}% | Score {} | {}",
        state.progress, state.score, extra
    );
    if state.can_complete() {
        println!(
            "{} {} (+{} points)",
            "🏆".bold(),
            CHALLENGE_COMPLETED.name.green().bold(),
            CHALLENGE_COMPLETED.points
        );
    }
}

fn play_village() -> ecopal_core::Result<()> {
    let mut village = SolarVillage::new();
    println!("{}", "🏘️ Build Your Solar Village".green().bold());
    loop {
        for (i, item) in village.items().iter().enumerate() {
            let mark = if village.is_built(item.id) { "✔" } else { " " };
            println!("  {}) {} {} {} (${})", i + 1, mark, item.icon, item.name, item.cost);
        }
        let Some(input) = prompt("build> (number, r to reset, q to leave)")? else {
            return Ok(());
        };
        match input.as_str() {
            "q" | "" => return Ok(()),
            "r" => {
                village.reset();
                continue;
            }
            _ => {}
        }
        let Some(item) = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| village.items().get(i))
        else {
            println!("Please enter a number between 1 and {}.", village.items().len());
            continue;
        };
        match village.select(item.id) {
            Ok(purchase) => {
                println!("{} Added {} to your village! +10 points", "✔".green(), purchase.item.name);
                if let Some(achievement) = purchase.achievement {
                    println!("{} {} (+{} points)", "🏅".bold(), achievement.name.yellow().bold(), achievement.points);
                }
            }
            Err(e @ (EcoPalError::AlreadyBuilt(_) | EcoPalError::OverBudget { .. })) => println!("{}", e.to_string().red()),
            Err(e) => return Err(e),
        }
        let state = village.state();
        print_state(
            state,
            &format!("Energy {} | Happiness {} | Budget ${}", state.energy, state.happiness, state.budget),
        );
    }
}

fn play_tracker() -> ecopal_core::Result<()> {
    let mut tracker = CarbonTracker::new();
    println!("{}", "📊 Daily Carbon Tracker".green().bold());
    loop {
        for (i, activity) in tracker.activities().iter().enumerate() {
            println!("  {}) {} {} ({:+} CO₂)", i + 1, activity.icon, activity.name, activity.carbon);
        }
        let Some(input) = prompt("choose> (number, r to reset, q to leave)")? else {
            return Ok(());
        };
        match input.as_str() {
            "q" | "" => return Ok(()),
            "r" => {
                tracker.reset();
                continue;
            }
            _ => {}
        }
        let Some(activity) = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| tracker.activities().get(i))
        else {
            println!("Please enter a number between 1 and {}.", tracker.activities().len());
            continue;
        };
        let activity = tracker.record(activity.id)?;
        if activity.is_green() {
            println!(
                "{} Great choice! Reduced carbon footprint by {}kg CO₂",
                "✔".green(),
                activity.carbon.unsigned_abs()
            );
        }
        let state = tracker.state();
        print_state(
            state,
            &format!("Footprint {}kg CO₂ | Eco score {}", state.carbon_footprint, tracker.eco_score()),
        );
    }
}
