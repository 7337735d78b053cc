use chrono::NaiveDateTime;
use sqlx::PgPool;
use storage::{
    dto::rules::{CreatePayoutScheduleRequest, CreateRuleSetRequest},
    error::{Result, StorageError},
    models::{PayoutSchedule, RuleSet},
    repository::payout_schedule::PayoutScheduleRepository,
    repository::rule_set::RuleSetRepository,
};
use uuid::Uuid;

pub async fn list_rule_sets(pool: &PgPool) -> Result<Vec<RuleSet>> {
    RuleSetRepository::new(pool).list().await
}

pub async fn get_rule_set(pool: &PgPool, year: i32) -> Result<RuleSet> {
    RuleSetRepository::new(pool).find_by_year(year).await
}

pub async fn create_rule_set(pool: &PgPool, req: &CreateRuleSetRequest) -> Result<RuleSet> {
    let candidate = RuleSet {
        rule_set_id: Uuid::nil(),
        year: req.year,
        fish_limit: req.fish_limit,
        dead_fish_penalty: req.dead_fish_penalty,
        max_points: req.max_points,
        zero_points_offset: req.zero_points_offset,
        buy_in_points_offset: req.buy_in_points_offset,
        disqualified_points_offset: req.disqualified_points_offset,
        created_at: NaiveDateTime::default(),
    };
    candidate.validate().map_err(StorageError::Validation)?;

    RuleSetRepository::new(pool).create(req).await
}

pub async fn list_payout_schedules(pool: &PgPool) -> Result<Vec<PayoutSchedule>> {
    PayoutScheduleRepository::new(pool).list().await
}

pub async fn get_payout_schedule(pool: &PgPool, year: i32) -> Result<PayoutSchedule> {
    PayoutScheduleRepository::new(pool).find_by_year(year).await
}

pub async fn create_payout_schedule(
    pool: &PgPool,
    req: &CreatePayoutScheduleRequest,
) -> Result<PayoutSchedule> {
    let candidate = PayoutSchedule {
        payout_schedule_id: Uuid::nil(),
        year: req.year,
        club: req.club,
        place_1: req.place_1,
        place_2: req.place_2,
        place_3: req.place_3,
        charity: req.charity,
        big_bass: req.big_bass,
        paid_places: req.paid_places,
        created_at: NaiveDateTime::default(),
    };
    candidate.validate().map_err(StorageError::Validation)?;

    PayoutScheduleRepository::new(pool).create(req).await
}
