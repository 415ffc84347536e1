//! Round configuration options.

use core::time::Duration;

/// Configuration options for a rummy round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use rummyrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_jokers(2)
///     .with_think_time(Duration::ZERO)
///     .with_strict_suit_runs(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Physical joker cards shuffled into the deck after the designation is drawn.
    pub jokers: u8,
    /// Cards dealt to each side.
    pub hand_size: usize,
    /// How long the presentation layer should let the opponent "think"
    /// before showing its move. The engine itself never waits.
    pub think_time: Duration,
    /// Whether declared runs must share a single suit.
    /// `false` accepts suit-blind runs such as 4♦ 5♠ 6♣.
    pub strict_suit_runs: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            jokers: 1,
            hand_size: 13,
            think_time: Duration::from_secs(2),
            strict_suit_runs: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of physical jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use rummyrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_jokers(2);
    /// assert_eq!(options.jokers, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: u8) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets the number of cards dealt to each side.
    ///
    /// # Example
    ///
    /// ```
    /// use rummyrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(10);
    /// assert_eq!(options.hand_size, 10);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the opponent's simulated think time.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use rummyrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_think_time(Duration::from_millis(500));
    /// assert_eq!(options.think_time, Duration::from_millis(500));
    /// ```
    #[must_use]
    pub const fn with_think_time(mut self, think_time: Duration) -> Self {
        self.think_time = think_time;
        self
    }

    /// Sets whether runs must share a suit.
    ///
    /// # Example
    ///
    /// ```
    /// use rummyrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_strict_suit_runs(true);
    /// assert!(options.strict_suit_runs);
    /// ```
    #[must_use]
    pub const fn with_strict_suit_runs(mut self, strict: bool) -> Self {
        self.strict_suit_runs = strict;
        self
    }
}
