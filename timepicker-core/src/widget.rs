use futures::future::LocalBoxFuture;

use crate::callbacks::Handler;
use crate::events::TimepickerEvent;
use crate::options::TimepickerOptions;

/// Capability surface of a live timepicker-ui instance.
///
/// Methods take `&self`: implementations are handles to an object owned by
/// the widget library, and the widget may call back into event handlers
/// while one of these calls is running.
pub trait TimepickerWidget {
    /// Data handed to event handlers.
    type Payload: 'static;
    /// Root element returned by `getWrapper`.
    type Wrapper;

    /// Build the widget's DOM structures.
    fn create(&self);
    /// Tear down the widget and release its DOM structures.
    fn destroy(&self);
    fn open(&self);
    fn close(&self);
    /// Set the displayed time; `trigger_update` also rewrites the input text
    /// and notifies listeners.
    fn set_value(&self, value: &str, trigger_update: bool);
    fn value(&self) -> String;
    /// Reconfigure the widget; with `create` set, internal structures are
    /// rebuilt to reflect the new options.
    fn update(&self, options: &TimepickerOptions<Self::Payload>, create: bool);
    /// Subscribe `handler` to `event`. The same handler must later be passed
    /// to [`TimepickerWidget::off`] to remove it.
    fn on(&self, event: TimepickerEvent, handler: &Handler<Self::Payload>);
    fn off(&self, event: TimepickerEvent, handler: &Handler<Self::Payload>);
    fn once(&self, event: TimepickerEvent, handler: &Handler<Self::Payload>);
    fn wrapper(&self) -> Option<Self::Wrapper>;
}

/// Deferred acquisition of the widget library.
///
/// Loading is split from construction so that a component unmounted while
/// the library is still loading never constructs an instance.
pub trait WidgetLoader {
    /// The input element the widget binds to.
    type Host;
    /// Whatever `load` resolves to, typically the widget constructor.
    type Module;
    type Widget: TimepickerWidget;
    type Error;

    fn load(&self) -> LocalBoxFuture<'static, Result<Self::Module, Self::Error>>;

    fn construct(
        &self,
        module: &Self::Module,
        host: &Self::Host,
        options: Option<&TimepickerOptions<<Self::Widget as TimepickerWidget>::Payload>>,
    ) -> Result<Self::Widget, Self::Error>;
}
