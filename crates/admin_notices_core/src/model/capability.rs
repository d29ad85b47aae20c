//! User capability checks used to restrict notice visibility.

use crate::host::AdminContext;
use crate::model::NoticeConfigError;
use serde_json::Value;

/// Maximum extra arguments accepted by a host capability check.
pub const MAX_CAPABILITY_ARGS: usize = 2;

/// One capability name plus the extra arguments forwarded to the host check.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCapability {
    capability: String,
    args: Vec<Value>,
}

impl UserCapability {
    /// Creates a capability check without extra arguments.
    pub fn new(capability: impl Into<String>) -> Result<Self, NoticeConfigError> {
        Self::with_args(capability, Vec::new())
    }

    /// Creates a capability check with extra arguments, e.g. an object id.
    ///
    /// # Errors
    /// - `EmptyCapability` when the name is blank.
    /// - `TooManyCapabilityArgs` when more than [`MAX_CAPABILITY_ARGS`] are given.
    pub fn with_args(
        capability: impl Into<String>,
        args: Vec<Value>,
    ) -> Result<Self, NoticeConfigError> {
        let capability = capability.into();
        if capability.trim().is_empty() {
            return Err(NoticeConfigError::EmptyCapability);
        }
        if args.len() > MAX_CAPABILITY_ARGS {
            return Err(NoticeConfigError::TooManyCapabilityArgs {
                capability,
                count: args.len(),
            });
        }
        Ok(Self { capability, args })
    }

    pub fn capability(&self) -> &str {
        &self.capability
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Checks whether the active user holds this capability.
    pub fn current_user_can(&self, ctx: &dyn AdminContext) -> bool {
        ctx.current_user_can(&self.capability, &self.args)
    }
}
