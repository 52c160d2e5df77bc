pub const DEFAULT_HEALTH: i32 = 3;

/// A target on the board: a position plus the hits it can still absorb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    health: i32,
}

impl Default for Alien {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Alien {
    pub fn new(x: i32, y: i32) -> Self {
        Self::with_health(x, y, DEFAULT_HEALTH)
    }

    /// No validation: zero or negative health yields an already depleted alien.
    pub fn with_health(x: i32, y: i32, health: i32) -> Self {
        Self { x, y, health }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Takes one point of health. Returns `false` once the alien is depleted.
    pub fn hit(&mut self) -> bool {
        if self.health > 0 {
            self.health -= 1;
            tracing::trace!(target: "alien", health = self.health, "hit registered");
            true
        } else {
            tracing::debug!(target: "alien", health = self.health, "hit on depleted alien");
            false
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn teleport(&mut self, x: i32, y: i32) -> bool {
        tracing::trace!(target: "alien", from = ?self.position(), to = ?(x, y), "teleport");
        self.x = x;
        self.y = y;
        true
    }

    pub fn collision_detection(&self, other: &Alien) -> bool {
        self.x == other.x && self.y == other.y
    }
}
