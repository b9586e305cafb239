//! Records that delegate missing fields to a shared prototype.
//!
//! An account either owns a field or inherits it from the nearest prototype
//! up its chain that does. Prototypes are shared through `Rc`, so "is this
//! my prototype" is an identity check, never a field comparison.

use std::rc::Rc;

use crate::assert;
use crate::config::RunConfig;
use crate::errors::CaseResult;
use crate::harness::Suite;
use crate::output::Reporter;

#[derive(Debug, Default)]
pub struct Account {
    name: Option<String>,
    kind: Option<String>,
    prototype: Option<Rc<Account>>,
}

impl Account {
    pub fn new(name: &str, kind: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            kind: Some(kind.to_string()),
            prototype: None,
        }
    }

    /// An empty account whose fields all come from `prototype`.
    pub fn derive(prototype: &Rc<Account>) -> Self {
        Self {
            prototype: Some(Rc::clone(prototype)),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.lookup(|a| a.name.as_deref())
    }

    pub fn kind(&self) -> Option<&str> {
        self.lookup(|a| a.kind.as_deref())
    }

    pub fn prototype(&self) -> Option<&Rc<Account>> {
        self.prototype.as_ref()
    }

    fn lookup<'a>(&'a self, field: impl Fn(&'a Account) -> Option<&'a str>) -> Option<&'a str> {
        let mut current = self;
        loop {
            if let Some(value) = field(current) {
                return Some(value);
            }
            current = current.prototype.as_deref()?;
        }
    }
}

/// True when `account` was derived directly from `admin`.
pub fn is_admin(account: &Account, admin: &Rc<Account>) -> bool {
    account
        .prototype()
        .map_or(false, |prototype| Rc::ptr_eq(prototype, admin))
}

pub fn suite<R: Reporter>(suite: &mut Suite<R>, config: &RunConfig) -> CaseResult {
    let user = Rc::new(Account::new("Default User", "user"));
    let admin = Rc::new(Account::derive(&user).with_kind("admin"));

    suite.describe("prototype chains", |g| {
        g.it("inherits the name from the user prototype", || {
            assert::strict_equal(admin.name(), Some("Default User"))
        });
        g.it("overrides the kind on the admin prototype", || {
            assert::strict_equal(admin.kind(), Some("admin"))?;
            assert::strict_equal(user.kind(), Some("user"))
        });
        g.it("recognizes accounts derived from admin", || {
            let root = Account::derive(&admin).with_name("root");
            assert::ok(is_admin(&root, &admin), "root should be an admin")?;
            assert::strict_equal(root.kind(), Some("admin"))
        });
        if config.with_submit {
            g.it("does not treat plain users as admins", || {
                let guest = Account::derive(&user);
                assert::ok(!is_admin(&guest, &admin), "guest should not be an admin")
            });
            g.it("compares prototypes by identity", || {
                let lookalike = Rc::new(Account::derive(&user).with_kind("admin"));
                let impostor = Account::derive(&lookalike);
                assert::strict_equal(impostor.kind(), Some("admin"))?;
                assert::ok(!is_admin(&impostor, &admin), "lookalike prototype accepted")?;
                assert::not_strict_equal(Rc::clone(&lookalike), Rc::clone(&admin))
            });
        }
        Ok(())
    })
}
