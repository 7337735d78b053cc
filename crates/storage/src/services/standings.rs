use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::standings::{
    AoyStanding, BigBassWinner, HeavyStringer, PayoutSummary, TournamentStandings,
};
use crate::error::{Result, StorageError};
use crate::models::{PayoutSchedule, RuleSet, Tournament};
use crate::repository::payout_schedule::PayoutScheduleRepository;
use crate::repository::result::ResultRepository;
use crate::repository::season::SeasonRepository;
use crate::repository::team_result::TeamResultRepository;
use crate::repository::tournament::TournamentRepository;

use super::placement::assign_places;
use super::points::award_points;
use super::{awards, payouts, ResultCard};

/// Recompute and store place numbers for a tournament.
///
/// Runs in one transaction with the tournament row locked, so two
/// recomputes of the same event serialize instead of interleaving their
/// writes. Safe to run any number of times.
pub async fn compute_standings(pool: &PgPool, tournament_id: Uuid) -> Result<()> {
    let mut tx = pool.begin().await?;

    let tournament = lock_tournament(&mut tx, tournament_id).await?;
    let schedule = load_payout_schedule(&mut tx, &tournament).await?;
    let paid_places = schedule.paid_places.max(0) as usize;

    let mut cards = load_result_cards(&mut tx, tournament_id).await?;
    assign_places(&mut cards, paid_places);
    store_result_places(&mut tx, &cards).await?;

    if tournament.team {
        let mut team_cards = load_team_cards(&mut tx, tournament_id).await?;
        assign_places(&mut team_cards, paid_places);
        store_team_places(&mut tx, &team_cards).await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Recompute and store points for a placed tournament.
///
/// A tournament that does not count toward the season race is left
/// untouched. Placement must have run first.
pub async fn compute_points(pool: &PgPool, tournament_id: Uuid) -> Result<()> {
    let mut tx = pool.begin().await?;

    let tournament = lock_tournament(&mut tx, tournament_id).await?;
    if !tournament.points_count {
        return Ok(());
    }

    let rules = load_rule_set(&mut tx, &tournament).await?;

    let mut cards = load_result_cards(&mut tx, tournament_id).await?;
    award_points(&mut cards, &rules)?;
    store_points(&mut tx, &cards).await?;

    tx.commit().await?;
    Ok(())
}

/// Stored placement and points, as last computed.
pub async fn get_standings(pool: &PgPool, tournament_id: Uuid) -> Result<TournamentStandings> {
    TournamentRepository::new(pool).find_by_id(tournament_id).await?;

    Ok(TournamentStandings {
        tournament_id,
        results: ResultRepository::new(pool).list_lines(tournament_id).await?,
        teams: TeamResultRepository::new(pool).list_lines(tournament_id).await?,
    })
}

/// Pot totals for a tournament, from its payout schedule and entry count.
pub async fn get_payouts(pool: &PgPool, tournament_id: Uuid) -> Result<PayoutSummary> {
    let tournament = TournamentRepository::new(pool).find_by_id(tournament_id).await?;

    let schedule = PayoutScheduleRepository::new(pool)
        .find_by_id(tournament.payout_schedule_id)
        .await
        .map_err(|e| missing_config(e, "payout schedule", &tournament))?;

    let results = ResultRepository::new(pool);
    let participant_count = results.count_for_tournament(tournament_id).await?;
    let best_big_bass = results.best_member_big_bass(tournament_id).await?;

    Ok(payouts::summarize(&schedule, participant_count, best_big_bass))
}

pub async fn get_angler_of_year(pool: &PgPool, year: i32) -> Result<Vec<AoyStanding>> {
    let rows = SeasonRepository::new(pool).member_results(year).await?;
    Ok(awards::angler_of_year(&rows))
}

pub async fn get_heavy_stringer(pool: &PgPool, year: i32) -> Result<Option<HeavyStringer>> {
    let rows = SeasonRepository::new(pool).member_results(year).await?;
    Ok(awards::heavy_stringer(&rows))
}

pub async fn get_big_bass(pool: &PgPool, year: i32) -> Result<Option<BigBassWinner>> {
    let rows = SeasonRepository::new(pool).member_results(year).await?;
    Ok(awards::big_bass(&rows))
}

fn missing_config(err: StorageError, what: &str, tournament: &Tournament) -> StorageError {
    match err {
        StorageError::NotFound => StorageError::MissingConfiguration(format!(
            "no {} configured for tournament {}",
            what, tournament.tournament_id
        )),
        other => other,
    }
}

async fn lock_tournament(conn: &mut PgConnection, tournament_id: Uuid) -> Result<Tournament> {
    let tournament = sqlx::query_as::<_, Tournament>(
        "SELECT tournament_id, name, lake, date, team, points_count, paper, complete,
                rule_set_id, payout_schedule_id, created_at
         FROM tournaments
         WHERE tournament_id = $1
         FOR UPDATE",
    )
    .bind(tournament_id)
    .fetch_optional(conn)
    .await?
    .ok_or(StorageError::NotFound)?;

    Ok(tournament)
}

async fn load_rule_set(conn: &mut PgConnection, tournament: &Tournament) -> Result<RuleSet> {
    let rules = sqlx::query_as::<_, RuleSet>(
        "SELECT rule_set_id, year, fish_limit, dead_fish_penalty, max_points,
                zero_points_offset, buy_in_points_offset, disqualified_points_offset,
                created_at
         FROM rule_sets
         WHERE rule_set_id = $1",
    )
    .bind(tournament.rule_set_id)
    .fetch_optional(conn)
    .await?
    .ok_or_else(|| {
        StorageError::MissingConfiguration(format!(
            "no rule set configured for tournament {}",
            tournament.tournament_id
        ))
    })?;

    Ok(rules)
}

async fn load_payout_schedule(
    conn: &mut PgConnection,
    tournament: &Tournament,
) -> Result<PayoutSchedule> {
    let schedule = sqlx::query_as::<_, PayoutSchedule>(
        "SELECT payout_schedule_id, year, club, place_1, place_2, place_3, charity,
                big_bass, paid_places, created_at
         FROM payout_schedules
         WHERE payout_schedule_id = $1",
    )
    .bind(tournament.payout_schedule_id)
    .fetch_optional(conn)
    .await?
    .ok_or_else(|| {
        StorageError::MissingConfiguration(format!(
            "no payout schedule configured for tournament {}",
            tournament.tournament_id
        ))
    })?;

    Ok(schedule)
}

async fn load_result_cards(
    conn: &mut PgConnection,
    tournament_id: Uuid,
) -> Result<Vec<ResultCard>> {
    let cards = sqlx::query_as::<_, ResultCard>(
        "SELECT r.result_id, r.total_weight, r.big_bass_weight, r.num_fish, r.buy_in,
                r.disqualified, a.member, r.locked, r.place_finish, r.points
         FROM results r
         INNER JOIN anglers a ON r.angler_id = a.angler_id
         WHERE r.tournament_id = $1
         ORDER BY r.created_at",
    )
    .bind(tournament_id)
    .fetch_all(conn)
    .await?;

    Ok(cards)
}

async fn load_team_cards(conn: &mut PgConnection, tournament_id: Uuid) -> Result<Vec<ResultCard>> {
    let cards = sqlx::query_as::<_, ResultCard>(
        "SELECT team_result_id AS result_id, total_weight, big_bass_weight, num_fish,
                buy_in, disqualified, TRUE AS member, FALSE AS locked, place_finish,
                NULL::integer AS points
         FROM team_results
         WHERE tournament_id = $1
         ORDER BY created_at",
    )
    .bind(tournament_id)
    .fetch_all(conn)
    .await?;

    Ok(cards)
}

// Locked rows keep whatever place and points they already hold.

async fn store_result_places(conn: &mut PgConnection, cards: &[ResultCard]) -> Result<()> {
    for card in cards.iter().filter(|c| !c.locked) {
        sqlx::query("UPDATE results SET place_finish = $2 WHERE result_id = $1")
            .bind(card.result_id)
            .bind(card.place_finish)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

async fn store_team_places(conn: &mut PgConnection, cards: &[ResultCard]) -> Result<()> {
    for card in cards {
        sqlx::query("UPDATE team_results SET place_finish = $2 WHERE team_result_id = $1")
            .bind(card.result_id)
            .bind(card.place_finish)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

async fn store_points(conn: &mut PgConnection, cards: &[ResultCard]) -> Result<()> {
    for card in cards.iter().filter(|c| !c.locked) {
        sqlx::query("UPDATE results SET points = $2 WHERE result_id = $1")
            .bind(card.result_id)
            .bind(card.points)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}
