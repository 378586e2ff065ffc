use envflag_types::{FlagValue, Hook, HookContext, Reason};
use tracing::{debug, warn};

/// Hook that traces each evaluation stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHook;

impl Hook for LoggingHook {
    fn before(&self, ctx: &HookContext) {
        debug!(
            flag_key = %ctx.flag_key,
            kind = %ctx.kind,
            client = %ctx.client_name,
            provider = %ctx.provider.name,
            "Evaluating flag"
        );
    }

    fn after(&self, ctx: &HookContext, value: &FlagValue, reason: Reason) {
        debug!(flag_key = %ctx.flag_key, value = %value, reason = %reason, "Flag evaluated");
    }

    fn error(&self, ctx: &HookContext, message: &str) {
        warn!(flag_key = %ctx.flag_key, error = %message, "Flag evaluation failed");
    }
}
