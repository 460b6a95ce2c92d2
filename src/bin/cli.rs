use std::collections::HashSet;
use std::error::Error;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use claire_demo::content;
use claire_demo::player::ScriptPlayer;
use claire_demo::script::{build_script, ChatMode, Message, PolicyId, StepAction, Timing};

/// Player tick cadence when replaying in real time
const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Conversation mode to play
    #[arg(short, long, value_enum, default_value_t = ChatMode::Contact)]
    mode: ChatMode,

    /// Policy the conversation pertains to (defaults to "gl")
    #[arg(short, long, value_enum)]
    policy: Option<PolicyId>,

    /// Replay the script in real time instead of printing the transcript
    #[arg(long)]
    play: bool,

    /// How many loops to play before exiting (with --play)
    #[arg(long, default_value_t = 1)]
    cycles: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let script = build_script(cli.mode, cli.policy, &Timing::default());

    if cli.play {
        play(script, cli.cycles).await;
    } else {
        print_transcript(&script);
    }

    Ok(())
}

/// Print the timeline as a plain transcript with offsets.
fn print_transcript(script: &claire_demo::script::Script) {
    println!(
        "# {} / {} \u{2014} {:.1}s per cycle",
        script.mode(),
        script.policy(),
        script.total_duration().as_secs_f32()
    );

    for step in script.steps() {
        let at = step.delay.as_secs_f32();
        match &step.action {
            StepAction::Add(message) => match message {
                Message::Incoming { .. } if message.is_typing() => {
                    println!("[{:>6.1}s] Claire is typing\u{2026}", at);
                }
                Message::Incoming { text, .. } => println!("[{:>6.1}s] Claire: {}", at, text),
                Message::Outgoing { text, .. } => println!("[{:>6.1}s]    You: {}", at, text),
            },
            StepAction::UpdateIncoming { text, .. } => {
                println!("[{:>6.1}s] Claire: {}", at, text);
            }
            StepAction::React { emoji, .. } => {
                println!("[{:>6.1}s]         (reacted {})", at, emoji);
            }
        }
    }
}

/// Replay the script through the real player, printing messages as they land.
async fn play(script: claire_demo::script::Script, cycles: u64) {
    // The analysis step the web demo shows before the chat opens.
    let mut elapsed = 0;
    for processing in content::PROCESSING_MESSAGES {
        tokio::time::sleep(Duration::from_millis(processing.delay_ms.saturating_sub(elapsed))).await;
        elapsed = processing.delay_ms;
        println!("  {}", processing.text);
    }
    println!();

    let mut player = ScriptPlayer::new(script);
    player.start(Instant::now());

    let mut printed = 0usize;
    let mut reacted: HashSet<usize> = HashSet::new();
    let mut last_cycle = player.cycle();

    loop {
        player.tick(Instant::now());

        if player.cycle() != last_cycle {
            last_cycle = player.cycle();
            if last_cycle >= cycles {
                break;
            }
            printed = 0;
            reacted.clear();
            println!("--- loop {} ---", last_cycle + 1);
        }

        // Print completed messages in order; hold at a typing indicator.
        while printed < player.messages().len() {
            let message = &player.messages()[printed];
            if message.is_typing() {
                break;
            }
            match message {
                Message::Incoming { text, .. } => println!("Claire: {}", text),
                Message::Outgoing { text, .. } => println!("   You: {}", text),
            }
            printed += 1;
        }

        // Announce reactions as they attach to already-printed messages.
        for (i, message) in player.messages().iter().enumerate().take(printed) {
            if let Some(emoji) = message.reaction() {
                if reacted.insert(i) {
                    println!("        (reacted {})", emoji);
                }
            }
        }

        tokio::time::sleep(TICK_INTERVAL).await;
    }
}
