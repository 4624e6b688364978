//! Lifecycle coordination
//!
//! [`LifecycleCoordinator`] is the only component that mutates tickets.
//! It owns the unit-of-work boundary: an update is one transaction
//! spanning the ticket row, the history ledger and the comment thread,
//! and the closed-ticket lock is checked on a read made inside that
//! transaction. Read paths go straight to the stores.

use crate::core::{
    AddCommentRequest, CreateTicketRequest, Status, Ticket, TicketDetails, TicketId,
    UpdateTicketRequest,
};
use crate::error::{Result, TicketDeskError};
use crate::storage::{CommentStore, Database, HistoryStore, TicketStore, UserStore, numbers};
use chrono::Utc;
use tracing::{info, warn};

/// Comment recorded on the initial history entry of every ticket
const CREATED_COMMENT: &str = "Ticket created";

/// Orchestrates ticket mutations across the stores
#[derive(Debug, Clone)]
pub struct LifecycleCoordinator {
    db: Database,
}

impl LifecycleCoordinator {
    /// Create a coordinator over the given database
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// The underlying database, for read paths that bypass the coordinator
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Create a new ticket
    ///
    /// The ticket number is generated and consumed inside one unit of
    /// work, which keeps numbering serialized with the insert. The
    /// initial history entry (None → Open) is recorded as a second step:
    /// if that append fails, the ticket itself still exists.
    pub async fn create_ticket(&self, request: &CreateTicketRequest) -> Result<Ticket> {
        if request.subject.trim().is_empty() {
            return Err(TicketDeskError::Validation("Subject is required".into()));
        }
        if request.description.trim().is_empty() {
            return Err(TicketDeskError::Validation(
                "Description is required".into(),
            ));
        }

        let now = Utc::now();

        let mut uow = self.db.begin().await?;
        if UserStore::fetch(&mut uow, request.created_by).await?.is_none() {
            return Err(TicketDeskError::UserNotFound {
                id: request.created_by,
            });
        }

        let number = numbers::next_ticket_number(&mut uow).await?;
        let id = TicketStore::insert(
            &mut uow,
            &number,
            &request.subject,
            &request.description,
            request.priority,
            request.created_by,
            now,
        )
        .await?;
        uow.commit().await?;

        let mut conn = self.db.acquire().await?;
        HistoryStore::append(
            &mut conn,
            id,
            None,
            Status::Open,
            request.created_by,
            Some(CREATED_COMMENT),
            now,
        )
        .await?;

        let ticket = TicketStore::fetch_required(&mut conn, id).await?;
        info!(%id, number = %ticket.number, "created ticket");
        Ok(ticket)
    }

    /// Update a ticket's assignment and/or status
    ///
    /// One unit of work covers the field changes, the history entry (when
    /// the status actually changes) and the comment (when one is
    /// supplied, recorded as internal and authored by the actor). On any
    /// failure the whole unit of work rolls back; partial application is
    /// never observable.
    ///
    /// A ticket whose current status is `Closed` rejects every update
    /// whose requested status is not also `Closed` — including updates
    /// that request no status at all. Assigning to an unknown user fails
    /// with `UserNotFound` before anything is written.
    pub async fn update_ticket(&self, request: &UpdateTicketRequest) -> Result<Ticket> {
        let now = Utc::now();

        let mut uow = self.db.begin().await?;

        // The current status is read inside the transaction so a
        // concurrent close cannot slip between check and write.
        let current = TicketStore::fetch_required(&mut uow, request.ticket_id).await?;
        if current.is_closed() && request.status != Some(Status::Closed) {
            warn!(id = %current.id, number = %current.number, "rejected update of closed ticket");
            return Err(TicketDeskError::TicketClosed {
                number: current.number,
            });
        }

        if let Some(assignee) = request.assigned_to {
            if UserStore::fetch(&mut uow, assignee).await?.is_none() {
                return Err(TicketDeskError::UserNotFound { id: assignee });
            }
        }

        let new_status = request.status.unwrap_or(current.status);
        TicketStore::apply_update(&mut uow, current.id, request.assigned_to, new_status, now)
            .await?;

        if let Some(requested) = request.status {
            if requested != current.status {
                HistoryStore::append(
                    &mut uow,
                    current.id,
                    Some(current.status),
                    requested,
                    request.updated_by,
                    request.comment.as_deref(),
                    now,
                )
                .await?;
            }
        }

        if let Some(comment) = request.comment.as_deref() {
            if !comment.trim().is_empty() {
                CommentStore::append(&mut uow, current.id, comment, request.updated_by, true, now)
                    .await?;
            }
        }

        let updated = TicketStore::fetch_required(&mut uow, current.id).await?;
        uow.commit().await?;

        info!(id = %updated.id, status = %updated.status, "updated ticket");
        Ok(updated)
    }

    /// Add a comment to a ticket's thread
    ///
    /// No transition is involved and no closed-ticket check applies:
    /// closed tickets still accept comments through this path, while the
    /// update path rejects them. The asymmetry is deliberate and
    /// documented in DESIGN.md.
    pub async fn add_comment(&self, request: &AddCommentRequest) -> Result<()> {
        let now = Utc::now();

        let mut conn = self.db.acquire().await?;
        TicketStore::fetch_required(&mut conn, request.ticket_id).await?;
        CommentStore::append(
            &mut conn,
            request.ticket_id,
            &request.text,
            request.commented_by,
            request.internal,
            now,
        )
        .await?;

        info!(id = %request.ticket_id, "added comment");
        Ok(())
    }

    /// A ticket with its full history and comment thread
    pub async fn ticket_details(&self, id: TicketId) -> Result<TicketDetails> {
        let mut conn = self.db.acquire().await?;
        let ticket = TicketStore::fetch_required(&mut conn, id).await?;
        let history = HistoryStore::list_for_ticket(&mut conn, id).await?;
        let comments = CommentStore::list_for_ticket(&mut conn, id).await?;

        Ok(TicketDetails {
            ticket,
            history,
            comments,
        })
    }
}
