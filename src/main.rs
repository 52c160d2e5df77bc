use anyhow::Result;
use ellens_alien_game::GameConfig;

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    tracing::info!(target: "game", app = %config.app_name, "starting target practice");

    let mut alien = config.alien_at(0, 0);
    tracing::info!(target: "game", position = ?alien.position(), health = alien.health(), "alien spawned");

    while alien.hit() {
        tracing::info!(target: "game", health = alien.health(), "hit");
    }
    tracing::info!(target: "game", alive = alien.is_alive(), "alien depleted");

    alien.teleport(5, 5);
    let other = config.alien_at(5, 5);
    tracing::info!(
        target: "game",
        position = ?alien.position(),
        collides = alien.collision_detection(&other),
        "teleported next to a fresh alien"
    );

    tracing::info!(target: "game", "target practice complete");
    Ok(())
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
