use auth::Claims;
use auth::Role;

use crate::comment::models::Comment;
use crate::domain::user::models::UserId;

/// Actions a subject can request on a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Delete,
}

/// Decide whether a subject may perform an action on a comment.
///
/// Pure function of its inputs: admins may act on any comment, standard
/// subjects only on comments they authored. Claims reach this point only
/// after token verification, so the role and subject can be trusted.
///
/// # Arguments
/// * `claims` - Verified claims of the requesting subject
/// * `action` - Requested action
/// * `comment` - Target comment
///
/// # Returns
/// True if the action is allowed
pub fn can(claims: &Claims, action: Action, comment: &Comment) -> bool {
    match action {
        Action::Delete => match claims.role {
            Role::Admin => true,
            Role::Standard => UserId::from_string(&claims.sub)
                .map(|subject| subject == comment.author_id)
                .unwrap_or(false),
        },
    }
}

/// Convenience wrapper for the delete action.
///
/// # Arguments
/// * `claims` - Verified claims of the requesting subject
/// * `comment` - Target comment
///
/// # Returns
/// True if the subject may delete the comment
pub fn can_delete(claims: &Claims, comment: &Comment) -> bool {
    can(claims, Action::Delete, comment)
}
