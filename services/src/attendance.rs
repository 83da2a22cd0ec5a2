//! Attendance session state machine.
//!
//! An instance is `Open` from initialization until its token expires
//! (`Expired`) or a course rep closes it (`Closed`, terminal). Every
//! enrolled active student gets an `absent` record at initialization; a
//! successful scan flips that record to `present` exactly once.
//!
//! Time is passed in by the caller, and the online location audit draws
//! from an injected [`AuditSampler`], so every branch is reproducible.

use crate::audit::AuditSampler;
use crate::error::AttendanceError;
use crate::geofence::{self, Coordinates};
use crate::id_generator::{IdPrefix, next_id};
use crate::token::{TokenPayload, TokenService};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use common::config::Config;
use db::models::{
    attendance_instance::{self, ClassType, InstanceState, NewInstance},
    attendance_log,
    attendance_record::{self, AttendanceStatus},
    course, security_log, student,
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, SqlErr, TransactionTrait, prelude::Expr,
};
use serde::Serialize;
use tracing::{info, warn};

pub const EVENT_LOCATION_REQUIRED: &str = "location_required";
pub const EVENT_LOCATION_FAILED: &str = "location_verification_failed";

const DISPLAY_CODE_PREFIX: &str = "ATT-";

#[derive(Debug, Clone, Default)]
pub struct InitializeAttendance {
    pub course_id: Option<String>,
    pub date: Option<String>,
    pub class_type: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct InitializedAttendance {
    pub instance: attendance_instance::Model,
    pub token: String,
    /// Short code rendered into the QR image.
    pub display_code: String,
    /// Number of `absent` records created.
    pub enrolled: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MarkAttendance {
    pub token: Option<String>,
    pub student_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkedAttendance {
    pub attendance_id: String,
    pub instance_id: String,
    pub student_id: String,
    pub location_checked: bool,
    pub location_valid: bool,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct InstanceSummary {
    pub instance: attendance_instance::Model,
    pub state: InstanceState,
    pub present: u64,
    pub total: u64,
}

#[derive(Debug, Clone)]
pub struct ResolvedCode {
    pub instance_id: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub date: Option<NaiveDate>,
    pub student_id: Option<String>,
    pub course_id: Option<String>,
}

struct LocationCheck {
    checked: bool,
    valid: bool,
    message: &'static str,
}

pub struct AttendanceService {
    tokens: TokenService,
    sampler: AuditSampler,
    radius_meters: f64,
}

impl AttendanceService {
    pub fn new(tokens: TokenService, sampler: AuditSampler, radius_meters: f64) -> Self {
        Self {
            tokens,
            sampler,
            radius_meters,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            TokenService::new(
                &config.jwt_secret,
                Duration::minutes(config.attendance_token_ttl_minutes),
            ),
            AuditSampler::new(config.online_audit_probability),
            config.geofence_radius_meters,
        )
    }

    /// Creates an instance, signs its token and enrolls every active
    /// student of the course as `absent`, all in one transaction.
    pub async fn initialize(
        &self,
        db: &DatabaseConnection,
        req: InitializeAttendance,
        now: DateTime<Utc>,
    ) -> Result<InitializedAttendance, AttendanceError> {
        let (Some(course_id), Some(date), Some(class_type)) = (
            non_empty(req.course_id),
            non_empty(req.date),
            non_empty(req.class_type),
        ) else {
            return Err(AttendanceError::MissingFields(
                "Course ID, date, and class type are required",
            ));
        };

        let class_type: ClassType = class_type
            .parse()
            .map_err(|_| AttendanceError::InvalidClassType)?;

        let location = match class_type {
            ClassType::Physical => Coordinates::from_parts(req.latitude, req.longitude).ok_or(
                AttendanceError::LocationRequired(
                    "Location coordinates are required for physical classes",
                ),
            )?,
            ClassType::Online => Coordinates::new(
                req.latitude.unwrap_or(0.0),
                req.longitude.unwrap_or(0.0),
            ),
        };

        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| AttendanceError::InvalidDate)?;

        if course::Entity::find_by_id(course_id.as_str())
            .one(db)
            .await?
            .is_none()
        {
            return Err(AttendanceError::NotFound("Course not found"));
        }

        let txn = db.begin().await?;

        let instance_id = next_id(&txn, IdPrefix::AttendanceInstance).await?;
        let (token, expires_at) = self.tokens.issue(
            &TokenPayload {
                course_id: course_id.clone(),
                instance_id: instance_id.clone(),
                class_type,
                latitude: location.latitude,
                longitude: location.longitude,
            },
            now,
        )?;

        let instance = attendance_instance::Model::create(
            &txn,
            NewInstance {
                instance_id,
                course_id: course_id.clone(),
                date,
                class_type,
                latitude: location.latitude,
                longitude: location.longitude,
                token: token.clone(),
                expires_at,
            },
            now,
        )
        .await?;

        let students = student::Model::find_active_in_course(&txn, &course_id).await?;
        for s in &students {
            let attendance_id = next_id(&txn, IdPrefix::AttendanceRecord).await?;
            attendance_record::Model::create(
                &txn,
                &attendance_id,
                &instance,
                &s.student_id,
                AttendanceStatus::Absent,
                None,
            )
            .await?;
        }

        txn.commit().await?;

        info!(
            instance_id = %instance.instance_id,
            course_id = %instance.course_id,
            class_type = %instance.class_type,
            enrolled = students.len(),
            "Attendance initialized"
        );

        Ok(InitializedAttendance {
            display_code: instance.display_code(),
            token,
            enrolled: students.len(),
            instance,
        })
    }

    /// Closes an open instance and clears its token.
    ///
    /// The update is conditional on `is_closed = false`, so of two
    /// concurrent closers exactly one succeeds.
    pub async fn close(
        &self,
        db: &DatabaseConnection,
        instance_id: Option<String>,
    ) -> Result<(), AttendanceError> {
        let Some(instance_id) = non_empty(instance_id) else {
            return Err(AttendanceError::MissingFields("Instance ID required"));
        };

        let instance = attendance_instance::Entity::find_by_id(instance_id.as_str())
            .one(db)
            .await?
            .ok_or(AttendanceError::NotFound("Attendance not found"))?;
        if instance.is_closed {
            return Err(AttendanceError::AlreadyClosed);
        }

        let res = attendance_instance::Entity::update_many()
            .col_expr(attendance_instance::Column::IsClosed, Expr::value(true))
            .col_expr(
                attendance_instance::Column::Token,
                Expr::value(Option::<String>::None),
            )
            .filter(attendance_instance::Column::InstanceId.eq(instance_id.as_str()))
            .filter(attendance_instance::Column::IsClosed.eq(false))
            .exec(db)
            .await?;
        if res.rows_affected == 0 {
            return Err(AttendanceError::AlreadyClosed);
        }

        info!(instance_id = %instance_id, "Attendance closed");
        Ok(())
    }

    /// Verifies a scanned token and marks the student present.
    pub async fn mark(
        &self,
        db: &DatabaseConnection,
        req: MarkAttendance,
        now: DateTime<Utc>,
    ) -> Result<MarkedAttendance, AttendanceError> {
        let (Some(token), Some(student_id)) = (non_empty(req.token), non_empty(req.student_id))
        else {
            return Err(AttendanceError::MissingFields(
                "Student ID and token are required",
            ));
        };

        let claims = self.tokens.verify(&token, now)?;

        let instance = attendance_instance::Entity::find_by_id(claims.instance_id.as_str())
            .filter(attendance_instance::Column::CourseId.eq(claims.course_id.as_str()))
            .one(db)
            .await?
            .ok_or(AttendanceError::NotFound("Attendance session not found"))?;

        match instance.state_at(now) {
            InstanceState::Closed => return Err(AttendanceError::SessionClosed),
            InstanceState::Expired => return Err(AttendanceError::SessionExpired),
            InstanceState::Open => {}
        }
        if instance.token.as_deref() != Some(token.as_str()) {
            return Err(AttendanceError::TokenMismatch);
        }

        if student::Entity::find_by_id(student_id.as_str())
            .one(db)
            .await?
            .is_none()
        {
            return Err(AttendanceError::NotFound("Student not found"));
        }

        let location = Coordinates::from_parts(req.latitude, req.longitude);
        let check = self
            .verify_location(db, &instance, &student_id, location)
            .await?;

        let txn = db.begin().await?;

        let existing =
            attendance_record::Model::find_for_student(&txn, &instance.instance_id, &student_id)
                .await?;

        let attendance_id = match existing {
            Some(record) if record.status == AttendanceStatus::Present => {
                return Err(AttendanceError::AlreadyMarked);
            }
            Some(record) => {
                let marked =
                    mark_if_open(&txn, &record.attendance_id, &instance.instance_id, &token, now)
                        .await?;
                if !marked {
                    return Err(
                        refusal_after_race(&txn, &instance.instance_id, &student_id).await?,
                    );
                }
                record.attendance_id
            }
            None => {
                // Student joined the course after initialization.
                if !still_open(&txn, &instance.instance_id, &token).await? {
                    return Err(AttendanceError::SessionClosed);
                }
                let attendance_id = next_id(&txn, IdPrefix::AttendanceRecord).await?;
                let created = attendance_record::Model::create(
                    &txn,
                    &attendance_id,
                    &instance,
                    &student_id,
                    AttendanceStatus::Present,
                    Some(now),
                )
                .await;
                match created {
                    Ok(_) => attendance_id,
                    Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                        return Err(AttendanceError::AlreadyMarked);
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        };

        attendance_log::Model::append(
            &txn,
            &student_id,
            &instance.instance_id,
            check.checked,
            check.valid,
            check.message,
        )
        .await?;

        txn.commit().await?;

        let message = if check.message.is_empty() {
            "Attendance marked successfully.".to_owned()
        } else {
            format!("Attendance marked successfully. {}.", check.message)
        };

        info!(
            instance_id = %instance.instance_id,
            student_id = %student_id,
            location_checked = check.checked,
            "Attendance marked"
        );

        Ok(MarkedAttendance {
            attendance_id,
            instance_id: instance.instance_id,
            student_id,
            location_checked: check.checked,
            location_valid: check.valid,
            message,
        })
    }

    async fn verify_location(
        &self,
        db: &DatabaseConnection,
        instance: &attendance_instance::Model,
        student_id: &str,
        location: Option<Coordinates>,
    ) -> Result<LocationCheck, AttendanceError> {
        match instance.class_type {
            ClassType::Physical => {
                let Some(at) = location else {
                    let err = AttendanceError::LocationRequired("Location coordinates are required");
                    record_security_event(db, student_id, instance, EVENT_LOCATION_REQUIRED, &err)
                        .await?;
                    return Err(err);
                };

                let classroom = Coordinates::new(instance.latitude, instance.longitude);
                if !geofence::within_radius(classroom, at, self.radius_meters) {
                    let err = AttendanceError::OutOfRange {
                        radius: self.radius_meters.round() as i64,
                        distance: geofence::rounded_distance_meters(classroom, at) as i64,
                    };
                    record_security_event(db, student_id, instance, EVENT_LOCATION_FAILED, &err)
                        .await?;
                    return Err(err);
                }

                Ok(LocationCheck {
                    checked: true,
                    valid: true,
                    message: "Location verified",
                })
            }
            ClassType::Online => {
                if !self.sampler.should_audit() {
                    return Ok(LocationCheck {
                        checked: false,
                        valid: false,
                        message: "",
                    });
                }
                if location.is_none() {
                    let err = AttendanceError::LocationRequired("Random location check required");
                    record_security_event(db, student_id, instance, EVENT_LOCATION_REQUIRED, &err)
                        .await?;
                    return Err(err);
                }

                Ok(LocationCheck {
                    checked: true,
                    valid: true,
                    message: "Random location check completed",
                })
            }
        }
    }

    /// All instances, newest first.
    pub async fn list(
        &self,
        db: &DatabaseConnection,
    ) -> Result<Vec<attendance_instance::Model>, AttendanceError> {
        let instances = attendance_instance::Entity::find()
            .order_by_desc(attendance_instance::Column::CreatedAt)
            .order_by_desc(attendance_instance::Column::InstanceId)
            .all(db)
            .await?;
        if instances.is_empty() {
            return Err(AttendanceError::NoInstances);
        }
        Ok(instances)
    }

    pub async fn summary(
        &self,
        db: &DatabaseConnection,
        instance_id: &str,
        now: DateTime<Utc>,
    ) -> Result<InstanceSummary, AttendanceError> {
        let instance = attendance_instance::Entity::find_by_id(instance_id)
            .one(db)
            .await?
            .ok_or(AttendanceError::NotFound("Instance not found"))?;

        let total = attendance_record::Entity::find()
            .filter(attendance_record::Column::InstanceId.eq(instance_id))
            .count(db)
            .await?;
        let present = attendance_record::Entity::find()
            .filter(attendance_record::Column::InstanceId.eq(instance_id))
            .filter(attendance_record::Column::Status.eq(AttendanceStatus::Present))
            .count(db)
            .await?;

        Ok(InstanceSummary {
            state: instance.state_at(now),
            instance,
            present,
            total,
        })
    }

    pub async fn instance_records(
        &self,
        db: &DatabaseConnection,
        instance_id: &str,
    ) -> Result<Vec<attendance_record::Model>, AttendanceError> {
        if attendance_instance::Entity::find_by_id(instance_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(AttendanceError::NotFound("Instance not found"));
        }

        Ok(attendance_record::Entity::find()
            .filter(attendance_record::Column::InstanceId.eq(instance_id))
            .order_by_asc(attendance_record::Column::StudentId)
            .all(db)
            .await?)
    }

    /// Hard-deletes an instance together with its records.
    pub async fn delete_instance(
        &self,
        db: &DatabaseConnection,
        instance_id: &str,
    ) -> Result<(), AttendanceError> {
        let txn = db.begin().await?;

        let records = attendance_record::Entity::delete_many()
            .filter(attendance_record::Column::InstanceId.eq(instance_id))
            .exec(&txn)
            .await?;
        let res = attendance_instance::Entity::delete_by_id(instance_id)
            .exec(&txn)
            .await?;
        if res.rows_affected == 0 {
            return Err(AttendanceError::NotFound("Instance not found"));
        }

        txn.commit().await?;
        info!(
            instance_id = %instance_id,
            records = records.rows_affected,
            "Attendance instance deleted"
        );
        Ok(())
    }

    /// Exchanges a scanned display code (`ATT-<instanceId>`) for the signed
    /// token, as long as the instance is still open.
    pub async fn resolve_code(
        &self,
        db: &DatabaseConnection,
        code: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<ResolvedCode, AttendanceError> {
        let code = non_empty(code).ok_or(AttendanceError::InvalidCode)?;
        let instance_id = code
            .strip_prefix(DISPLAY_CODE_PREFIX)
            .filter(|id| !id.is_empty())
            .ok_or(AttendanceError::InvalidCode)?;

        let instance = attendance_instance::Entity::find_by_id(instance_id)
            .one(db)
            .await?
            .ok_or(AttendanceError::NotFound("Attendance session not found"))?;

        match instance.state_at(now) {
            InstanceState::Closed => Err(AttendanceError::SessionClosed),
            InstanceState::Expired => Err(AttendanceError::SessionExpired),
            InstanceState::Open => {
                let token = instance.token.ok_or(AttendanceError::SessionClosed)?;
                Ok(ResolvedCode {
                    instance_id: instance.instance_id,
                    token,
                    expires_at: instance.expires_at,
                })
            }
        }
    }

    /// Records matching every supplied filter, newest date first.
    pub async fn records(
        &self,
        db: &DatabaseConnection,
        filter: RecordFilter,
    ) -> Result<Vec<attendance_record::Model>, AttendanceError> {
        let mut query = attendance_record::Entity::find();
        if let Some(date) = filter.date {
            query = query.filter(attendance_record::Column::Date.eq(date));
        }
        if let Some(student_id) = non_empty(filter.student_id) {
            query = query.filter(attendance_record::Column::StudentId.eq(student_id));
        }
        if let Some(course_id) = non_empty(filter.course_id) {
            query = query.filter(attendance_record::Column::CourseId.eq(course_id));
        }

        Ok(query
            .order_by_desc(attendance_record::Column::Date)
            .order_by_asc(attendance_record::Column::AttendanceId)
            .all(db)
            .await?)
    }

    /// Manual override by a course rep. Marking an already present record
    /// is a no-op.
    pub async fn mark_manually(
        &self,
        db: &DatabaseConnection,
        attendance_id: Option<String>,
        student_id: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<attendance_record::Model, AttendanceError> {
        let (Some(attendance_id), Some(student_id)) =
            (non_empty(attendance_id), non_empty(student_id))
        else {
            return Err(AttendanceError::MissingFields(
                "Missing data to update attendee status",
            ));
        };

        let record = attendance_record::Entity::find_by_id(attendance_id.as_str())
            .filter(attendance_record::Column::StudentId.eq(student_id.as_str()))
            .one(db)
            .await?
            .ok_or(AttendanceError::NotFound("Attendee not found"))?;

        if record.status == AttendanceStatus::Present {
            return Ok(record);
        }

        attendance_record::Model::mark_present(db, &attendance_id, now).await?;
        attendance_record::Entity::find_by_id(attendance_id.as_str())
            .one(db)
            .await?
            .ok_or(AttendanceError::NotFound("Attendee not found"))
    }

    pub async fn delete_record(
        &self,
        db: &DatabaseConnection,
        attendance_id: &str,
    ) -> Result<(), AttendanceError> {
        if !attendance_record::Model::delete(db, attendance_id).await? {
            return Err(AttendanceError::NotFound("Attendance record not found"));
        }
        Ok(())
    }
}

/// Flips the record to `present` only while the instance is open with the
/// same token, so a concurrent close wins over an in-flight scan.
async fn mark_if_open<C: ConnectionTrait>(
    db: &C,
    attendance_id: &str,
    instance_id: &str,
    token: &str,
    now: DateTime<Utc>,
) -> Result<bool, AttendanceError> {
    let open_instance = open_instance_query(instance_id, token);

    let res = attendance_record::Entity::update_many()
        .col_expr(
            attendance_record::Column::Status,
            Expr::value(AttendanceStatus::Present.to_string()),
        )
        .col_expr(attendance_record::Column::MarkedAt, Expr::value(now))
        .filter(attendance_record::Column::AttendanceId.eq(attendance_id))
        .filter(attendance_record::Column::Status.eq(AttendanceStatus::Absent))
        .filter(attendance_record::Column::InstanceId.in_subquery(open_instance))
        .exec(db)
        .await?;

    Ok(res.rows_affected == 1)
}

async fn still_open<C: ConnectionTrait>(
    db: &C,
    instance_id: &str,
    token: &str,
) -> Result<bool, AttendanceError> {
    let found = attendance_instance::Entity::find()
        .filter(attendance_instance::Column::InstanceId.eq(instance_id))
        .filter(attendance_instance::Column::IsClosed.eq(false))
        .filter(attendance_instance::Column::Token.eq(token))
        .count(db)
        .await?;
    Ok(found > 0)
}

fn open_instance_query(instance_id: &str, token: &str) -> sea_orm::sea_query::SelectStatement {
    attendance_instance::Entity::find()
        .select_only()
        .column(attendance_instance::Column::InstanceId)
        .filter(attendance_instance::Column::InstanceId.eq(instance_id))
        .filter(attendance_instance::Column::IsClosed.eq(false))
        .filter(attendance_instance::Column::Token.eq(token))
        .into_query()
}

/// Works out why a conditional mark touched no rows.
async fn refusal_after_race<C: ConnectionTrait>(
    db: &C,
    instance_id: &str,
    student_id: &str,
) -> Result<AttendanceError, AttendanceError> {
    let record = attendance_record::Model::find_for_student(db, instance_id, student_id).await?;
    Ok(match record {
        Some(r) if r.status == AttendanceStatus::Present => AttendanceError::AlreadyMarked,
        _ => AttendanceError::SessionClosed,
    })
}

async fn record_security_event<C: ConnectionTrait>(
    db: &C,
    student_id: &str,
    instance: &attendance_instance::Model,
    event_type: &str,
    err: &AttendanceError,
) -> Result<(), AttendanceError> {
    let details = err.to_string();
    warn!(
        student_id = %student_id,
        instance_id = %instance.instance_id,
        event_type,
        details = %details,
        "Attendance location check failed"
    );
    security_log::Model::append(db, student_id, &instance.instance_id, event_type, &details)
        .await?;
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
