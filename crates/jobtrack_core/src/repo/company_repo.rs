//! Company storage gateway contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the durable load/insert/update/remove/commit surface the list
//!   store persists through.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Company::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - `commit()` must be called after a write batch before the operation is
//!   reported successful to the caller.

use crate::db::{migrations::latest_version, DbError};
use crate::model::company::{ApplicationStatus, Company, CompanyId, CompanyValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const COMPANY_SELECT_SQL: &str = "SELECT
    id,
    company_name,
    job_position,
    application_status,
    is_favorite,
    date_added
FROM companies";

const REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "company_name",
    "job_position",
    "application_status",
    "is_favorite",
    "date_added",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Gateway error for company persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(CompanyValidationError),
    Db(DbError),
    NotFound(CompanyId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "company not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted company data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CompanyValidationError> for RepoError {
    fn from(value: CompanyValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage gateway for company records.
///
/// Implementations guarantee that a successful `commit()` makes the
/// preceding write batch durable.
pub trait CompanyStore {
    fn load_all(&self) -> RepoResult<Vec<Company>>;
    fn insert(&self, company: &Company) -> RepoResult<CompanyId>;
    fn update(&self, company: &Company) -> RepoResult<()>;
    fn remove(&self, id: CompanyId) -> RepoResult<()>;
    fn commit(&self) -> RepoResult<()>;
}

/// SQLite-backed company store.
pub struct SqliteCompanyStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCompanyStore<'conn> {
    /// Wraps a migrated connection, rejecting unprepared schemas up front.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` lags behind
    ///   the latest migration.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not carry the `companies` surface this store queries.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'companies'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(RepoError::MissingRequiredTable("companies"));
        }

        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('companies');")?;
        let mut present = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            present.push(row.get::<_, String>(0)?);
        }
        for column in REQUIRED_COLUMNS {
            if !present.iter().any(|name| name == column) {
                return Err(RepoError::MissingRequiredColumn {
                    table: "companies",
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl CompanyStore for SqliteCompanyStore<'_> {
    fn load_all(&self) -> RepoResult<Vec<Company>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COMPANY_SELECT_SQL} ORDER BY date_added DESC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut companies = Vec::new();
        while let Some(row) = rows.next()? {
            companies.push(parse_company_row(row)?);
        }

        Ok(companies)
    }

    fn insert(&self, company: &Company) -> RepoResult<CompanyId> {
        company.validate()?;

        self.conn.execute(
            "INSERT INTO companies (
                id,
                company_name,
                job_position,
                application_status,
                is_favorite,
                date_added
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                company.id.to_string(),
                company.company_name.as_str(),
                company.job_position.as_str(),
                status_to_db(company.application_status),
                bool_to_int(company.is_favorite),
                company.date_added,
            ],
        )?;

        Ok(company.id)
    }

    fn update(&self, company: &Company) -> RepoResult<()> {
        company.validate()?;

        let changed = self.conn.execute(
            "UPDATE companies
             SET
                company_name = ?1,
                job_position = ?2,
                application_status = ?3,
                is_favorite = ?4
             WHERE id = ?5;",
            params![
                company.company_name.as_str(),
                company.job_position.as_str(),
                status_to_db(company.application_status),
                bool_to_int(company.is_favorite),
                company.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(company.id));
        }

        Ok(())
    }

    fn remove(&self, id: CompanyId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM companies WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn commit(&self) -> RepoResult<()> {
        // The connection runs in autocommit; durability here means moving the
        // WAL back into the main database file. Outside WAL this is a no-op.
        self.conn
            .query_row("PRAGMA wal_checkpoint(TRUNCATE);", [], |_| Ok(()))?;
        Ok(())
    }
}

fn parse_company_row(row: &Row<'_>) -> RepoResult<Company> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in companies.id"))
    })?;

    let status_text: String = row.get("application_status")?;
    let application_status = parse_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid status `{status_text}` in companies.application_status"
        ))
    })?;

    let is_favorite = match row.get::<_, i64>("is_favorite")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_favorite value `{other}` in companies.is_favorite"
            )));
        }
    };

    let company = Company {
        id,
        company_name: row.get("company_name")?,
        job_position: row.get("job_position")?,
        application_status,
        is_favorite,
        date_added: row.get("date_added")?,
    };
    company.validate()?;
    Ok(company)
}

fn status_to_db(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Applied => "applied",
        ApplicationStatus::PhoneScreen => "phone_screen",
        ApplicationStatus::OnSite => "on_site",
        ApplicationStatus::Offer => "offer",
        ApplicationStatus::Rejected => "rejected",
    }
}

fn parse_status(value: &str) -> Option<ApplicationStatus> {
    match value {
        "applied" => Some(ApplicationStatus::Applied),
        "phone_screen" => Some(ApplicationStatus::PhoneScreen),
        "on_site" => Some(ApplicationStatus::OnSite),
        "offer" => Some(ApplicationStatus::Offer),
        "rejected" => Some(ApplicationStatus::Rejected),
        _ => None,
    }
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
