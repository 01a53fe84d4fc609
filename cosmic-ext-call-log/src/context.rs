//! Display context
//!
//! Bundles the collaborators an interaction needs to render itself. The
//! defaults are English, left-to-right, in the system's UTC offset, with
//! no plugins installed.

use crate::bidi::BidiFormatter;
use crate::dates::{DateFormatter, LocalDateFormatter};
use crate::labels::{ContactsLabelResolver, NumberLabelResolver};
use crate::phone::{GlobalNumberClassifier, PhoneNumberClassifier};
use crate::plugin::{NoPluginIcons, PluginIconResolver};
use crate::resources::{DefaultResources, DisplayResources};
use std::fmt;
use std::sync::Arc;

/// Formatters, resolvers and resources for one display
///
/// Cloning is cheap; collaborators are shared.
///
/// # Examples
///
/// ```
/// use cosmic_ext_call_log::{BidiFormatter, DisplayContext};
///
/// let ctx = DisplayContext::default().with_bidi(BidiFormatter::rtl());
/// assert!(ctx.bidi().is_rtl_context());
/// ```
#[derive(Clone)]
pub struct DisplayContext {
    bidi: BidiFormatter,
    dates: Arc<dyn DateFormatter>,
    labels: Arc<dyn NumberLabelResolver>,
    plugin_icons: Arc<dyn PluginIconResolver>,
    numbers: Arc<dyn PhoneNumberClassifier>,
    resources: Arc<dyn DisplayResources>,
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self {
            bidi: BidiFormatter::ltr(),
            dates: Arc::new(LocalDateFormatter::local()),
            labels: Arc::new(ContactsLabelResolver),
            plugin_icons: Arc::new(NoPluginIcons),
            numbers: Arc::new(GlobalNumberClassifier),
            resources: Arc::new(DefaultResources::default()),
        }
    }
}

impl fmt::Debug for DisplayContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayContext")
            .field("bidi", &self.bidi)
            .finish_non_exhaustive()
    }
}

impl DisplayContext {
    pub fn with_bidi(mut self, bidi: BidiFormatter) -> Self {
        self.bidi = bidi;
        self
    }

    pub fn with_date_formatter(mut self, dates: impl DateFormatter + 'static) -> Self {
        self.dates = Arc::new(dates);
        self
    }

    pub fn with_label_resolver(mut self, labels: impl NumberLabelResolver + 'static) -> Self {
        self.labels = Arc::new(labels);
        self
    }

    pub fn with_plugin_icons(mut self, plugin_icons: impl PluginIconResolver + 'static) -> Self {
        self.plugin_icons = Arc::new(plugin_icons);
        self
    }

    pub fn with_number_classifier(
        mut self,
        numbers: impl PhoneNumberClassifier + 'static,
    ) -> Self {
        self.numbers = Arc::new(numbers);
        self
    }

    pub fn with_resources(mut self, resources: impl DisplayResources + 'static) -> Self {
        self.resources = Arc::new(resources);
        self
    }

    pub fn bidi(&self) -> &BidiFormatter {
        &self.bidi
    }

    pub fn dates(&self) -> &dyn DateFormatter {
        self.dates.as_ref()
    }

    pub fn labels(&self) -> &dyn NumberLabelResolver {
        self.labels.as_ref()
    }

    pub fn plugin_icons(&self) -> &dyn PluginIconResolver {
        self.plugin_icons.as_ref()
    }

    pub fn numbers(&self) -> &dyn PhoneNumberClassifier {
        self.numbers.as_ref()
    }

    pub fn resources(&self) -> &dyn DisplayResources {
        self.resources.as_ref()
    }
}
