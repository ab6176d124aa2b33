//! Missing-member fallback dispatch.

use missive_object::{Args, MemberError, Object, Value};
use tracing::{debug, trace};

use crate::accessor::TargetAccessor;
use crate::error::{DelegationError, Error};

/// A host type with delegation installed.
///
/// Implementing this trait is the type-level installation step: the accessor
/// is declared once (kept in a `static`), and `target` re-resolves it on
/// every call, so the capability set consulted is always that of the
/// target's current runtime type. Nothing is cached at installation time.
pub trait Delegating: Object {
    /// The accessor installed for this host type.
    fn accessor(&self) -> &'static TargetAccessor;

    /// Resolves the target. `None` models an absent (nil) target; a failure
    /// inside the accessor itself propagates to the caller unhandled.
    fn target(&self) -> Option<&dyn Object>;
}

/// Existence probe over the host and its delegation target.
///
/// `include_private` applies to the host's own members only. It is
/// deliberately not forwarded to the target: private members of the target
/// do not get delegated.
pub fn responds_to(host: &dyn Delegating, name: &str, include_private: bool) -> bool {
    if host
        .target()
        .is_some_and(|target| target.members().responds_to(name, false))
    {
        return true;
    }
    host.members().responds_to(name, include_private)
}

/// Dispatches `name` on `host`, falling back to the delegation target when
/// ordinary public resolution fails.
///
/// Members the host itself exposes publicly always win, even when the target
/// exposes the same name. A member found on the target is invoked the way
/// any public caller would invoke it, and its result or error returns
/// verbatim. When neither side recognizes the name, the host's standard
/// failure is classified: a nil target raises [`DelegationError`]; anything
/// else re-raises the ordinary failure unchanged.
pub fn send(host: &dyn Delegating, name: &str, args: Args) -> Result<Value, Error> {
    let own = host.members();
    if let Some(member) = own.get(name) {
        if member.is_public() {
            let receiver: &dyn Object = host;
            return member.invoke(receiver, args).map_err(Error::Member);
        }
        // Present but private: public resolution failed, exactly as for an
        // unknown name, so the fallback below still applies.
    }

    match host.target() {
        Some(target) if target.members().responds_to(name, false) => {
            trace!(member = name, target = target.type_name(), "delegating call");
            missive_object::send(target, name, args).map_err(Error::Member)
        }
        target => {
            if target.is_none() {
                let accessor = host.accessor().expression();
                debug!(member = name, accessor = %accessor, "delegation target is nil");
                return Err(DelegationError {
                    member: name.to_owned(),
                    accessor,
                }
                .into());
            }
            let failure = match own.get(name) {
                Some(_) => MemberError::PrivateMember {
                    member: name.to_owned(),
                    type_name: own.type_name(),
                },
                None => MemberError::NoSuchMember {
                    member: name.to_owned(),
                    type_name: own.type_name(),
                },
            };
            Err(failure.into())
        }
    }
}
