use rand::SeedableRng;
use rand_chacha::ChaChaRng;

/// Default number of spiral arms.
pub const DEFAULT_ARMS: u32 = 7;

/// Default spatial scale factor.
pub const DEFAULT_SCALE: f64 = 100.0;

/// Immutable run configuration plus the one random source it owns.
///
/// Every stage draws from this context's stream in a fixed order, so a
/// context is consumed by exactly one generation run; build a fresh one to
/// regenerate. The stream is never exposed except through `&mut` access,
/// keeping all randomness attributable to the seed.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    seed: u64,
    arena_count: usize,
    arms: u32,
    scale: f64,
    rng: ChaChaRng,
}

impl GenerationContext {
    /// Create a context with the default galaxy layout (7 arms, scale 100).
    ///
    /// Fails fast on configuration errors: a run needs at least one arena
    /// and at least one arm.
    ///
    /// # Example
    /// ```
    /// use galaxy::GenerationContext;
    ///
    /// let ctx = GenerationContext::new(1546098698, 100).unwrap();
    /// assert_eq!(ctx.arena_count(), 100);
    /// assert_eq!(ctx.arms(), 7);
    /// ```
    pub fn new(seed: u64, arena_count: usize) -> Result<Self, String> {
        Self::with_layout(seed, arena_count, DEFAULT_ARMS, DEFAULT_SCALE)
    }

    /// Create a context with an explicit arm count and scale factor.
    pub fn with_layout(
        seed: u64,
        arena_count: usize,
        arms: u32,
        scale: f64,
    ) -> Result<Self, String> {
        if arena_count == 0 {
            return Err("arena count must be positive".to_string());
        }
        if arms == 0 {
            return Err("spiral arm count must be positive".to_string());
        }

        Ok(Self {
            seed,
            arena_count,
            arms,
            scale,
            rng: ChaChaRng::seed_from_u64(seed),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn arena_count(&self) -> usize {
        self.arena_count
    }

    pub fn arms(&self) -> u32 {
        self.arms
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The context's random stream. Draw order is load-bearing for seed
    /// reproducibility; only the generation pipeline should touch this.
    pub fn rng_mut(&mut self) -> &mut ChaChaRng {
        &mut self.rng
    }
}
