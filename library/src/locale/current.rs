use crate::locale::locale::Locale;
use log::debug;
use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static CURRENT_LOCALE: RefCell<Locale> = RefCell::new(Locale::invariant());
}

/// Locale used by formatting calls that do not name one. Every thread
/// starts out with the invariant locale.
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.with(|current| current.borrow().clone())
}

pub(crate) fn with_current_locale<Output, Action: FnOnce(&Locale) -> Output>(action: Action) -> Output {
    CURRENT_LOCALE.with(|current| action(&current.borrow()))
}

/// Installs a locale as the current one for the calling thread; the
/// previous locale comes back when the scope is dropped, whichever way the
/// enclosing block is left.
#[must_use = "the previous locale is restored as soon as the scope is dropped"]
pub struct LocaleScope {
    previous: Option<Locale>,
    // restoration has to happen on the thread that entered the scope
    _not_send: PhantomData<*const ()>,
}

impl LocaleScope {
    pub fn enter(locale: impl Into<Locale>) -> Self {
        let locale = locale.into();
        debug!("entering locale scope '{}'", locale.name());
        let previous = CURRENT_LOCALE.with(|current| current.replace(locale));
        Self { previous: Some(previous), _not_send: PhantomData }
    }
}

impl Drop for LocaleScope {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            debug!("restoring locale '{}'", previous.name());
            CURRENT_LOCALE.with(|current| current.replace(previous));
        }
    }
}
