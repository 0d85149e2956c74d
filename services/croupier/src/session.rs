//! Round orchestration
//!
//! A round opens the betting window, lets every player place bets in its own
//! task, spins (which closes the window), and then settles every placed bet
//! concurrently.

use anyhow::{Context, Result};
use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use uuid::Uuid;

use roulette::Roulette;

use crate::config::Config;
use crate::domain::{PlacedBet, PlayerReport, RoundSummary, SettledBet};
use crate::player::{log_rejection, Player};

pub struct Croupier {
    config: Config,
    table: Arc<Roulette>,
    players: Vec<Player>,
    rounds_played: u32,
}

impl Croupier {
    pub fn new(config: Config) -> Result<Self> {
        let table = Roulette::from_config(&config.table).context("Failed to set up table")?;
        Ok(Self::with_table(config, Arc::new(table)))
    }

    pub fn with_table(config: Config, table: Arc<Roulette>) -> Self {
        let players = (0..config.croupier.player_count)
            .map(|id| Player::new(id, &config.croupier, config.table.seed))
            .collect();

        Self {
            config,
            table,
            players,
            rounds_played: 0,
        }
    }

    pub fn table(&self) -> &Arc<Roulette> {
        &self.table
    }

    /// Play all configured rounds
    pub async fn run(&mut self) -> Result<Vec<RoundSummary>> {
        let mut summaries = Vec::with_capacity(self.config.croupier.rounds as usize);
        for _ in 0..self.config.croupier.rounds {
            summaries.push(self.run_round().await?);
        }
        Ok(summaries)
    }

    pub async fn run_round(&mut self) -> Result<RoundSummary> {
        self.rounds_played += 1;
        let round = self.rounds_played;
        let round_id = Uuid::new_v4();
        let started_at = Utc::now();

        tracing::info!(%round_id, round, players = self.players.len(), "Betting open");
        self.table.open_betting();

        let players = std::mem::take(&mut self.players);
        let mut handles = Vec::with_capacity(players.len());
        for mut player in players {
            let table = self.table.clone();
            handles.push(tokio::spawn(async move {
                let report = player.place_bets(&table);
                (player, report)
            }));
        }

        let mut reports: Vec<PlayerReport> = Vec::with_capacity(handles.len());
        for result in join_all(handles).await {
            let (player, report) = result.context("Player task panicked")?;
            self.players.push(player);
            reports.push(report);
        }

        let winning_number = self.table.spin();
        // Keep the window shut while the round settles
        self.table.close_betting();
        metrics::counter!("roulette_spins_total").increment(1);
        tracing::info!(%round_id, round, winning_number, "Wheel spun");

        let placed: Vec<PlacedBet> = reports.iter().flat_map(|r| r.placed.clone()).collect();
        metrics::counter!("roulette_bets_placed_total").increment(placed.len() as u64);

        let settled = self.settle(&placed).await?;
        anyhow::ensure!(
            settled.len() == placed.len(),
            "Settled {} of {} bets",
            settled.len(),
            placed.len()
        );
        anyhow::ensure!(
            self.table.live_bets() == 0,
            "{} bets left on the table after settlement",
            self.table.live_bets()
        );
        metrics::counter!("roulette_bets_settled_total").increment(settled.len() as u64);

        let summary = RoundSummary {
            round_id,
            round,
            started_at,
            finished_at: Utc::now(),
            winning_number,
            bets_placed: placed.len(),
            duplicate_retries: reports.iter().map(|r| r.duplicate_retries).sum(),
            abandoned: reports.iter().map(|r| r.abandoned).sum(),
            winning_bets: settled.iter().filter(|s| s.paid > 0.0).count(),
            total_staked: placed.iter().map(|p| p.bet.amount()).sum(),
            total_paid: settled.iter().map(|s| s.paid).sum(),
        };

        tracing::info!(
            %round_id,
            round,
            winning_number,
            bets_placed = summary.bets_placed,
            winning_bets = summary.winning_bets,
            duplicate_retries = summary.duplicate_retries,
            abandoned = summary.abandoned,
            total_staked = summary.total_staked,
            total_paid = summary.total_paid,
            "Round settled"
        );

        Ok(summary)
    }

    /// Pay out every placed bet, one task per player
    async fn settle(&self, placed: &[PlacedBet]) -> Result<Vec<SettledBet>> {
        let mut by_player: Vec<Vec<PlacedBet>> = vec![Vec::new(); self.players.len()];
        for bet in placed {
            by_player[bet.player_id].push(bet.clone());
        }

        let handles = by_player.into_iter().map(|bets| {
            let table = self.table.clone();
            tokio::spawn(async move {
                bets.into_iter()
                    .map(|bet| -> roulette::Result<SettledBet> {
                        let paid = table.pay(bet.bet_id).map_err(|e| {
                            log_rejection(e.category(), &e.code(), bet.bet_id, "pay");
                            e
                        })?;
                        Ok(SettledBet {
                            bet_id: bet.bet_id,
                            player_id: bet.player_id,
                            paid,
                        })
                    })
                    .collect::<roulette::Result<Vec<_>>>()
            })
        });

        let mut settled = Vec::with_capacity(placed.len());
        for result in join_all(handles).await {
            let bets = result
                .context("Settlement task panicked")?
                .context("Failed to settle bet")?;
            settled.extend(bets);
        }
        Ok(settled)
    }
}
