use alloc::collections::VecDeque;
use core::fmt;
use core::time::Duration;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One playthrough: a board plus status and timing.
///
/// The session is the only thing that mutates its board. Renderers read it
/// through [`Session::snapshot`], which keeps unrevealed mines hidden while the
/// game is being played. A session is not `Clone` and its `Debug` output omits
/// the board.
pub struct Session<C> {
    config: GameConfig,
    board: Board,
    clock: C,
    status: GameStatus,
    revealed_count: CellCount,
    flagged_count: CellCount,
    started_at: Duration,
    ended_at: Option<Duration>,
    triggered_mine: Option<Coord2>,
}

impl<C> fmt::Debug for Session<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("status", &self.status)
            .field("revealed_count", &self.revealed_count)
            .field("flagged_count", &self.flagged_count)
            .field("started_at", &self.started_at)
            .field("ended_at", &self.ended_at)
            .field("triggered_mine", &self.triggered_mine)
            .finish_non_exhaustive()
    }
}

impl<C: Clock> Session<C> {
    /// Starts a game with mines placed uniformly at random by `rng`.
    pub fn new<R: Rng>(config: GameConfig, rng: R, clock: C) -> Result<Self> {
        Self::with_placer(config, RandomPlacer::new(rng), clock)
    }

    pub fn with_placer(
        config: GameConfig,
        mut placer: impl MinePlacer,
        clock: C,
    ) -> Result<Self> {
        config.validate()?;

        let mut board = Board::new(config.size())?;
        let placed = board.place_mines(placer.place(config)?)?;
        if placed != config.mines {
            log::warn!(
                "Placer produced {} distinct mines, requested {}",
                placed,
                config.mines
            );
            return Err(GameError::InvalidMineLayout);
        }
        calculate_adjacency(&mut board);

        let started_at = clock.now();
        log::debug!(
            "New {}x{} game with {} mines",
            config.rows,
            config.cols,
            config.mines
        );

        Ok(Self {
            config,
            board,
            clock,
            status: GameStatus::InProgress,
            revealed_count: 0,
            flagged_count: 0,
            started_at,
            ended_at: None,
            triggered_mine: None,
        })
    }

    /// Fresh session with the same configuration and clock, this one is left untouched.
    pub fn restart(&self, placer: impl MinePlacer) -> Result<Self>
    where
        C: Clone,
    {
        Self::with_placer(self.config, placer, self.clock.clone())
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Classic counter display: mines minus flags, negative when over-flagged.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.config.mines) - i64::from(self.flagged_count)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn started_at(&self) -> Duration {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<Duration> {
        self.ended_at
    }

    /// Number of mines that carry a flag.
    ///
    /// Flags on safe cells and unflagged mines are not penalized, and the
    /// count is taken over the whole board regardless of status.
    pub fn score(&self) -> CellCount {
        self.board.count_cells(|cell| cell.is_correctly_flagged())
    }

    /// Whole seconds since the session started, frozen once the game ends.
    pub fn elapsed_seconds(&self) -> u64 {
        let until = self.ended_at.unwrap_or_else(|| self.clock.now());
        until.saturating_sub(self.started_at).as_secs()
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.board.validate_coords(coords)?;
        Ok(CellView::of(self.board[coords], self.status))
    }

    pub fn snapshot(&self) -> BoardView {
        BoardView::new(&self.board, self.status)
    }

    /// Flips the flag on an unrevealed cell. Finished games are left untouched.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let coords = self.board.validate_coords(coords)?;
        if !self.status.is_in_progress() {
            return Ok(NoChange);
        }

        let cell = &mut self.board[coords];
        if !cell.toggle_flag() {
            return Ok(NoChange);
        }
        if cell.is_flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        Ok(Changed)
    }

    /// Opens a cell, cascading through zero cells.
    ///
    /// A call that opens nothing (finished game, revealed or flagged cell)
    /// returns `NoChange`, never `Continue`.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if !self.status.is_in_progress() || !self.board[coords].is_revealable() {
            return Ok(RevealOutcome::NoChange);
        }
        Ok(self.reveal_cell(coords))
    }

    fn reveal_cell(&mut self, coords: Coord2) -> RevealOutcome {
        let cell = &mut self.board[coords];
        cell.is_revealed = true;

        if cell.is_mine {
            log::debug!("Revealed mine at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.end_game(GameStatus::Lost);
            return RevealOutcome::Lose;
        }

        let adjacent_mines = cell.adjacent_mines;
        self.revealed_count += 1;
        log::debug!("Revealed {:?}, adjacent mines: {}", coords, adjacent_mines);

        if adjacent_mines == 0 {
            self.flood_reveal(coords);
        }

        if self.revealed_count == self.config.safe_cells() {
            self.end_game(GameStatus::Won);
            RevealOutcome::Win
        } else {
            RevealOutcome::Continue
        }
    }

    /// Opens the zero region around `origin` and its numbered border.
    ///
    /// `origin` must already be revealed. The `is_revealed` flag doubles as the
    /// visited set, so every cell is opened at most once and the queue never
    /// holds more than eight entries per opened cell.
    fn flood_reveal(&mut self, origin: Coord2) {
        let mut to_visit: VecDeque<Coord2> = self.board.iter_neighbors(origin).collect();
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            origin,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = &mut self.board[visit_coords];
            if !cell.is_revealable() {
                log::trace!("Skipping cell at {:?}", visit_coords);
                continue;
            }
            // neighbors of a zero cell are never mines
            debug_assert!(!cell.is_mine);

            cell.is_revealed = true;
            let adjacent_mines = cell.adjacent_mines;
            self.revealed_count += 1;
            log::trace!(
                "Flood opened cell at {:?}, adjacent mines: {}",
                visit_coords,
                adjacent_mines
            );

            if adjacent_mines == 0 {
                let board = &self.board;
                to_visit.extend(
                    board
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| board[pos].is_revealable()),
                );
            }
        }
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }

        let now = self.clock.now();
        self.status = status;
        self.ended_at = Some(now);
        log::debug!(
            "Game ended {:?} after {}s",
            status,
            now.saturating_sub(self.started_at).as_secs()
        );
    }
}
