//! The contextual policy evaluator.
//!
//! Layers attribute conditions on top of role grants for request-time
//! restrictions that are not role-based ("only from this location", "not
//! from mobile"). Conditions can only narrow access: a caller without the
//! role grant is denied before any condition is looked at, and a caller
//! with the grant must additionally pass every condition.
//!
//! Evaluation is fail-closed. A condition naming a field the context does
//! not carry evaluates to false rather than erroring or passing; an
//! authorization gate must never fail open on malformed input.

use tracing::{debug, warn};

use terra_contracts::context::{ConditionOperator, PermissionCondition, RequestContext};
use terra_contracts::permission::{Permission, PermissionSet};

use crate::checker::has_permission;

/// Check `permission` under `conditions` evaluated against `context`.
///
/// 1. The role grant is checked first; without it the answer is `false`
///    no matter what the conditions say.
/// 2. With no conditions, the grant stands unconditionally.
/// 3. Otherwise every condition must pass (logical AND). Evaluation is
///    total: all conditions are evaluated and every failure is logged,
///    rather than stopping at the first.
pub fn has_contextual_permission(
    permissions: &PermissionSet,
    permission: &Permission,
    context: &RequestContext,
    conditions: &[PermissionCondition],
) -> bool {
    if !has_permission(permissions, permission) {
        debug!(permission = %permission, user_id = %context.user_id, "role grant absent; conditions not evaluated");
        return false;
    }

    if conditions.is_empty() {
        return true;
    }

    let mut all_passed = true;
    for condition in conditions {
        if !condition_passes(context, condition) {
            warn!(
                permission = %permission,
                user_id = %context.user_id,
                field = %condition.field,
                operator = ?condition.operator,
                "contextual condition failed"
            );
            all_passed = false;
        }
    }

    all_passed
}

/// Evaluate a single condition against the context.
///
/// A field the context does not define (or an optional field that is
/// unset) fails the condition, including for `ne`: "not equal to X" is not
/// satisfiable when the attribute is unknown.
fn condition_passes(context: &RequestContext, condition: &PermissionCondition) -> bool {
    let Some(actual) = context.field(&condition.field) else {
        warn!(field = %condition.field, "condition references unknown or unset context field; failing closed");
        return false;
    };

    match condition.operator {
        ConditionOperator::Eq => actual == condition.value,
        ConditionOperator::Ne => actual != condition.value,
        // `in` requires an array value; anything else fails closed.
        ConditionOperator::In => condition
            .value
            .as_array()
            .map(|candidates| candidates.contains(&actual))
            .unwrap_or(false),
    }
}
