//! Call Log Interactions
//!
//! Wraps one row of the phone's call log and renders it as a contact card
//! entry:
//!
//! - **Header**: the number, wrapped so it stays left-to-right
//! - **Body**: the number type label ("Mobile", a custom label, or the
//!   in-call plugin name)
//! - **Footer**: when the call happened, with a direction arrow icon
//!
//! Tapping the entry calls the number back, either as a regular phone call
//! or through the in-call plugin that handled the original call.
//!
//! ## Missing Columns
//!
//! Rows come from the phone as-is. Nothing is validated: every accessor
//! reads its column independently and a missing or uncoercible column
//! reads as `None`. A row without a call type simply renders no arrow.
//!
//! ## Plugin Calls
//!
//! Rows carrying a plugin package name were handled by a third-party
//! in-call provider. Whoever recognises the provider calls
//! [`CallLogInteraction::set_plugin_info`] once, before rendering, to
//! attach the provider's icon and name.
//!
//! ## Example
//!
//! ```
//! use cosmic_ext_call_log::row::{columns, CallLogRow};
//! use cosmic_ext_call_log::{CallLogInteraction, ContactInteraction, DisplayContext};
//!
//! let row = CallLogRow::new()
//!     .with(columns::NUMBER, "5550100")
//!     .with(columns::TYPE, 3)
//!     .with(columns::CACHED_NUMBER_TYPE, 2);
//!
//! let ctx = DisplayContext::default();
//! let call = CallLogInteraction::new(row);
//!
//! assert_eq!(call.view_header(&ctx).as_deref(), Some("5550100"));
//! assert_eq!(call.view_body(&ctx).as_deref(), Some("Mobile"));
//! assert!(call.footer_icon(&ctx).is_some());
//! assert_eq!(call.intent(&ctx).data.as_deref(), Some("tel:5550100"));
//! ```

use crate::call_type::CallType;
use crate::component::ComponentName;
use crate::context::DisplayContext;
use crate::icon::{Icon, ResourceId};
use crate::intent::{self, plugin_extras, Intent, PHONE_CONTENT_ITEM_TYPE};
use crate::interaction::ContactInteraction;
use crate::labels::TYPE_CUSTOM;
use crate::resources::StringKey;
use crate::row::{columns, CallLogRow};
use crate::tts::AccessibleText;
use crate::{CallLogError, Result};
use tracing::{debug, warn};

/// Icon shown for regular calls
pub const CALL_LOG_ICON: ResourceId = ResourceId::PHONE;

/// Display state attached to rows handled by an in-call plugin
#[derive(Debug, Clone, PartialEq)]
struct PluginDisplay {
    icon: Option<Icon>,
    icon_resource_id: ResourceId,
    name: String,
}

/// One call log entry rendered as a contact interaction
#[derive(Debug, Clone, PartialEq)]
pub struct CallLogInteraction {
    row: CallLogRow,
    plugin: Option<PluginDisplay>,
}

impl CallLogInteraction {
    pub fn new(row: CallLogRow) -> Self {
        Self { row, plugin: None }
    }

    /// The backing row
    pub fn row(&self) -> &CallLogRow {
        &self.row
    }

    pub fn cached_name(&self) -> Option<String> {
        self.row.get_as_string(columns::CACHED_NAME)
    }

    pub fn cached_number_label(&self) -> Option<String> {
        self.row.get_as_string(columns::CACHED_NUMBER_LABEL)
    }

    pub fn cached_number_type(&self) -> Option<i32> {
        self.row.get_as_i32(columns::CACHED_NUMBER_TYPE)
    }

    /// Call start, milliseconds since epoch
    pub fn date(&self) -> Option<i64> {
        self.row.get_as_i64(columns::DATE)
    }

    /// Call duration in seconds
    pub fn duration(&self) -> Option<i64> {
        self.row.get_as_i64(columns::DURATION)
    }

    pub fn is_read(&self) -> Option<bool> {
        self.row.get_as_bool(columns::IS_READ)
    }

    pub fn is_new(&self) -> Option<bool> {
        self.row.get_as_bool(columns::NEW)
    }

    pub fn limit_param_key(&self) -> Option<i32> {
        self.row.get_as_i32(columns::LIMIT_PARAM_KEY)
    }

    pub fn offset_param_key(&self) -> Option<i32> {
        self.row.get_as_i32(columns::OFFSET_PARAM_KEY)
    }

    /// The number exactly as stored in the row
    pub fn raw_number(&self) -> Option<String> {
        self.row.get_as_string(columns::NUMBER)
    }

    /// The number, wrapped to render left-to-right in the display's context
    pub fn number(&self, ctx: &DisplayContext) -> Option<String> {
        self.raw_number()
            .map(|number| ctx.bidi().unicode_wrap_ltr(&number))
    }

    pub fn number_presentation(&self) -> Option<i32> {
        self.row.get_as_i32(columns::NUMBER_PRESENTATION)
    }

    /// Raw call type code
    pub fn type_code(&self) -> Option<i32> {
        self.row.get_as_i32(columns::TYPE)
    }

    /// Call direction, `None` for absent or non-directional types
    pub fn call_type(&self) -> Option<CallType> {
        self.type_code().and_then(CallType::from_code)
    }

    /// Flattened component of the in-call plugin that handled the call
    pub fn plugin_package_name(&self) -> Option<String> {
        self.row.get_as_string(columns::PLUGIN_PACKAGE_NAME)
    }

    pub fn plugin_user_handle(&self) -> Option<String> {
        self.row.get_as_string(columns::PLUGIN_USER_HANDLE)
    }

    /// Plugin name attached by [`set_plugin_info`](Self::set_plugin_info)
    pub fn plugin_name(&self) -> Option<&str> {
        self.plugin.as_ref().map(|p| p.name.as_str())
    }

    fn plugin_component(&self) -> Option<String> {
        self.plugin_package_name().filter(|name| !name.is_empty())
    }

    /// Mark this row as handled by an in-call plugin
    ///
    /// Decodes the row's plugin component, loads the plugin icon through the
    /// context's resolver and remembers icon, resource id and name for the
    /// accessors. A plugin whose icon cannot be resolved keeps the default
    /// phone icon but still reports `resource_id`.
    ///
    /// # Errors
    ///
    /// - [`CallLogError::MissingPluginComponent`] if the row has no plugin
    ///   package name
    /// - [`CallLogError::InvalidComponentName`] if it cannot be decoded
    ///
    /// The interaction is left unchanged on error.
    pub fn set_plugin_info(
        &mut self,
        ctx: &DisplayContext,
        resource_id: ResourceId,
        plugin_name: impl Into<String>,
    ) -> Result<()> {
        let flat = self
            .plugin_component()
            .ok_or(CallLogError::MissingPluginComponent)?;

        let component = ComponentName::unflatten(&flat).map_err(|e| {
            warn!("Cannot classify call log row as plugin call: {}", e);
            e
        })?;

        let icon = ctx.plugin_icons().resolve_icon(&component, resource_id);
        if icon.is_none() {
            debug!("No icon for plugin {}, using phone icon", component);
        }

        self.plugin = Some(PluginDisplay {
            icon,
            icon_resource_id: resource_id,
            name: plugin_name.into(),
        });

        Ok(())
    }

    fn call_type_string(&self, ctx: &DisplayContext) -> String {
        self.call_type()
            .map(|t| ctx.resources().string(t.description_key()))
            .unwrap_or_default()
    }

    fn plugin_intent(&self, ctx: &DisplayContext, component: String) -> Intent {
        let number = self.raw_number().unwrap_or_default();
        let mime_type = if ctx.numbers().is_global_phone_number(&number) {
            PHONE_CONTENT_ITEM_TYPE
        } else {
            ""
        };

        let mut intent = Intent::new();
        intent
            .put_extra(
                plugin_extras::KEY_DATA_ID,
                plugin_extras::INCALL_PLUGIN_CALL_ENTRY_ID,
            )
            .put_extra(plugin_extras::KEY_COMPONENT, component)
            .put_extra(
                plugin_extras::KEY_NAME,
                self.plugin_name().map(str::to_string),
            )
            .put_extra(plugin_extras::KEY_NUMBER, number)
            .put_extra(plugin_extras::KEY_MIMETYPE, mime_type);
        intent
    }
}

impl From<CallLogRow> for CallLogInteraction {
    fn from(row: CallLogRow) -> Self {
        Self::new(row)
    }
}

impl ContactInteraction for CallLogInteraction {
    fn intent(&self, ctx: &DisplayContext) -> Intent {
        match self.plugin_component() {
            Some(component) => self.plugin_intent(ctx, component),
            None => intent::call_intent(&self.raw_number().unwrap_or_default()),
        }
    }

    fn interaction_date(&self) -> i64 {
        self.date().unwrap_or(-1)
    }

    fn view_header(&self, ctx: &DisplayContext) -> Option<String> {
        self.number(ctx)
    }

    fn view_body(&self, ctx: &DisplayContext) -> Option<String> {
        let number_type = self.cached_number_type().unwrap_or(TYPE_CUSTOM);
        let label = ctx.labels().label_for_call(
            self.number(ctx).as_deref(),
            number_type,
            self.cached_number_label().as_deref(),
            self.plugin_name(),
        );
        Some(label)
    }

    fn view_footer(&self, ctx: &DisplayContext) -> Option<String> {
        self.date().map(|date| ctx.dates().format_timestamp(date))
    }

    fn icon(&self, ctx: &DisplayContext) -> Option<Icon> {
        match self.plugin.as_ref().and_then(|p| p.icon.as_ref()) {
            Some(icon) => Some(icon.clone()),
            None => Some(ctx.resources().icon(CALL_LOG_ICON)),
        }
    }

    fn body_icon(&self, _ctx: &DisplayContext) -> Option<Icon> {
        None
    }

    fn footer_icon(&self, ctx: &DisplayContext) -> Option<Icon> {
        self.call_type()
            .map(|call_type| call_type.arrow_icon(ctx.resources()))
    }

    fn content_description(&self, ctx: &DisplayContext) -> AccessibleText {
        let phone_number = self.view_header(ctx).unwrap_or_default();
        let footer = self.view_footer(ctx).unwrap_or_default();
        let call_type = self.call_type_string(ctx);

        let description = ctx.resources().format_string(
            StringKey::RecentCallDescription,
            &[&call_type, &phone_number, &footer],
        );

        AccessibleText::telephone(description, &phone_number)
    }

    fn icon_resource_id(&self) -> ResourceId {
        match &self.plugin {
            Some(plugin) if plugin.icon_resource_id.0 != 0 => plugin.icon_resource_id,
            _ => CALL_LOG_ICON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidi::{BidiFormatter, LRE, PDF};
    use crate::call_type::{INCOMING_TYPE, MISSED_TYPE, OUTGOING_TYPE};
    use crate::icon::IconSource;
    use crate::intent::ACTION_CALL;
    use crate::plugin::InstalledPluginIcons;
    use crate::resources::{ColorKey, DefaultResources, DisplayResources};

    const PLUGIN: &str = "org.voip/.InCallService";

    fn ctx() -> DisplayContext {
        DisplayContext::default().with_plugin_icons(
            ["org.voip"].into_iter().collect::<InstalledPluginIcons>(),
        )
    }

    fn call(call_type: i32) -> CallLogInteraction {
        CallLogInteraction::new(
            CallLogRow::new()
                .with(columns::NUMBER, "5550100")
                .with(columns::TYPE, call_type),
        )
    }

    #[test]
    fn test_footer_icon_incoming() {
        let ctx = ctx();
        let icon = call(INCOMING_TYPE).footer_icon(&ctx).unwrap();

        assert_eq!(icon.resource_id(), ResourceId::CALL_ARROW);
        assert_eq!(icon.rotation_degrees, 0.0);
        assert_eq!(
            icon.color_filter.unwrap().color,
            DefaultResources::default().color(ColorKey::CallArrowGreen)
        );
    }

    #[test]
    fn test_footer_icon_missed() {
        let ctx = ctx();
        let icon = call(MISSED_TYPE).footer_icon(&ctx).unwrap();

        assert_eq!(icon.rotation_degrees, 0.0);
        assert_eq!(
            icon.color_filter.unwrap().color,
            DefaultResources::default().color(ColorKey::CallArrowRed)
        );
    }

    #[test]
    fn test_footer_icon_outgoing() {
        let ctx = ctx();
        let icon = call(OUTGOING_TYPE).footer_icon(&ctx).unwrap();

        assert_eq!(icon.resource_id(), ResourceId::CALL_ARROW);
        assert_eq!(icon.rotation_degrees, 180.0);
        assert_eq!(
            icon.color_filter.unwrap().color,
            DefaultResources::default().color(ColorKey::CallArrowGreen)
        );
    }

    #[test]
    fn test_footer_icon_absent_or_other_type() {
        let ctx = ctx();
        let untyped = CallLogInteraction::new(CallLogRow::new().with(columns::NUMBER, "1"));

        assert!(untyped.footer_icon(&ctx).is_none());
        assert!(call(4).footer_icon(&ctx).is_none());
    }

    #[test]
    fn test_content_description_without_type() {
        let ctx = ctx();
        let untyped = CallLogInteraction::new(CallLogRow::new().with(columns::NUMBER, "5550100"));
        let description = untyped.content_description(&ctx);

        assert_eq!(
            description.text,
            "Recent call. . Phone number: 5550100. Called ."
        );
        assert_eq!(description.spans.len(), 1);
    }

    #[test]
    fn test_content_description_missed() {
        let ctx = ctx();
        let description = call(MISSED_TYPE).content_description(&ctx);

        assert!(description.text.starts_with("Recent call. Missed. "));
        let span = &description.spans[0];
        assert_eq!(&description.text[span.range.clone()], "5550100");
        assert_eq!(span.telephone, "5550100");
    }

    #[test]
    fn test_regular_call_intent() {
        let intent = call(INCOMING_TYPE).intent(&ctx());

        assert_eq!(intent.action.as_deref(), Some(ACTION_CALL));
        assert_eq!(intent.data.as_deref(), Some("tel:5550100"));
        assert!(!intent.is_plugin_call());
    }

    #[test]
    fn test_empty_plugin_package_is_regular_call() {
        let call = CallLogInteraction::new(
            CallLogRow::new()
                .with(columns::NUMBER, "5550100")
                .with(columns::PLUGIN_PACKAGE_NAME, ""),
        );
        assert_eq!(call.intent(&ctx()).action.as_deref(), Some(ACTION_CALL));
    }

    #[test]
    fn test_plugin_call_intent() {
        let ctx = ctx();
        let mut call = CallLogInteraction::new(
            CallLogRow::new()
                .with(columns::NUMBER, "+15550100")
                .with(columns::PLUGIN_PACKAGE_NAME, PLUGIN),
        );
        call.set_plugin_info(&ctx, ResourceId(42), "VoIP").unwrap();

        let intent = call.intent(&ctx);
        assert!(intent.action.is_none());
        assert!(intent.is_plugin_call());
        assert_eq!(intent.extra_str(plugin_extras::KEY_COMPONENT), Some(PLUGIN));
        assert_eq!(intent.extra_str(plugin_extras::KEY_NAME), Some("VoIP"));
        assert_eq!(intent.extra_str(plugin_extras::KEY_NUMBER), Some("+15550100"));
        assert_eq!(
            intent.extra_str(plugin_extras::KEY_MIMETYPE),
            Some(PHONE_CONTENT_ITEM_TYPE)
        );
    }

    #[test]
    fn test_plugin_call_intent_non_global_number() {
        let call = CallLogInteraction::new(
            CallLogRow::new()
                .with(columns::NUMBER, "alice@voip.example.org")
                .with(columns::PLUGIN_PACKAGE_NAME, PLUGIN),
        );

        let intent = call.intent(&ctx());
        assert_eq!(intent.extra_str(plugin_extras::KEY_MIMETYPE), Some(""));
        assert_eq!(intent.extras[plugin_extras::KEY_NAME], serde_json::Value::Null);
    }

    #[test]
    fn test_set_plugin_info() {
        let ctx = ctx();
        let mut call = CallLogInteraction::new(
            CallLogRow::new().with(columns::PLUGIN_PACKAGE_NAME, PLUGIN),
        );
        assert_eq!(call.icon_resource_id(), CALL_LOG_ICON);

        call.set_plugin_info(&ctx, ResourceId(42), "VoIP").unwrap();

        let icon = call.icon(&ctx).unwrap();
        assert!(matches!(icon.source, IconSource::Plugin { .. }));
        assert_eq!(icon.resource_id(), ResourceId(42));
        assert_eq!(call.icon_resource_id(), ResourceId(42));
        assert_eq!(call.plugin_name(), Some("VoIP"));
    }

    #[test]
    fn test_set_plugin_info_uninstalled_plugin_keeps_phone_icon() {
        let ctx = DisplayContext::default();
        let mut call = CallLogInteraction::new(
            CallLogRow::new().with(columns::PLUGIN_PACKAGE_NAME, PLUGIN),
        );
        call.set_plugin_info(&ctx, ResourceId(42), "VoIP").unwrap();

        assert_eq!(call.icon(&ctx).unwrap().resource_id(), CALL_LOG_ICON);
        assert_eq!(call.icon_resource_id(), ResourceId(42));
    }

    #[test]
    fn test_set_plugin_info_zero_resource_id_reports_phone_icon() {
        let ctx = ctx();
        let mut call = CallLogInteraction::new(
            CallLogRow::new().with(columns::PLUGIN_PACKAGE_NAME, PLUGIN),
        );
        call.set_plugin_info(&ctx, ResourceId(0), "VoIP").unwrap();

        assert_eq!(call.icon_resource_id(), CALL_LOG_ICON);
    }

    #[test]
    fn test_set_plugin_info_malformed_component() {
        let ctx = ctx();
        let mut call = CallLogInteraction::new(
            CallLogRow::new().with(columns::PLUGIN_PACKAGE_NAME, "org.voip"),
        );

        let result = call.set_plugin_info(&ctx, ResourceId(42), "VoIP");
        assert!(matches!(result, Err(CallLogError::InvalidComponentName(_))));
        assert_eq!(call.plugin_name(), None);
        assert_eq!(call.icon_resource_id(), CALL_LOG_ICON);
    }

    #[test]
    fn test_set_plugin_info_without_plugin() {
        let mut call = call(INCOMING_TYPE);
        let result = call.set_plugin_info(&ctx(), ResourceId(42), "VoIP");
        assert!(matches!(result, Err(CallLogError::MissingPluginComponent)));
    }

    #[test]
    fn test_view_body_defaults_to_custom() {
        let ctx = ctx();
        let labelled = CallLogInteraction::new(
            CallLogRow::new().with(columns::CACHED_NUMBER_LABEL, "Cabin"),
        );
        assert_eq!(labelled.view_body(&ctx).as_deref(), Some("Cabin"));

        let mut plugin = CallLogInteraction::new(
            CallLogRow::new().with(columns::PLUGIN_PACKAGE_NAME, PLUGIN),
        );
        plugin.set_plugin_info(&ctx, ResourceId(42), "VoIP").unwrap();
        assert_eq!(plugin.view_body(&ctx).as_deref(), Some("VoIP"));
    }

    #[test]
    fn test_number_is_wrapped_in_rtl_context() {
        let ctx = ctx().with_bidi(BidiFormatter::rtl());
        let number = call(INCOMING_TYPE).number(&ctx).unwrap();

        assert!(number.contains(&format!("{LRE}5550100{PDF}")));
        // The dialable number is never wrapped.
        assert_eq!(
            call(INCOMING_TYPE).intent(&ctx).data.as_deref(),
            Some("tel:5550100")
        );
    }

    #[test]
    fn test_sparse_row() {
        let ctx = ctx();
        let call = CallLogInteraction::new(CallLogRow::new());

        assert_eq!(call.cached_name(), None);
        assert_eq!(call.cached_number_label(), None);
        assert_eq!(call.cached_number_type(), None);
        assert_eq!(call.date(), None);
        assert_eq!(call.duration(), None);
        assert_eq!(call.is_read(), None);
        assert_eq!(call.is_new(), None);
        assert_eq!(call.limit_param_key(), None);
        assert_eq!(call.offset_param_key(), None);
        assert_eq!(call.number(&ctx), None);
        assert_eq!(call.number_presentation(), None);
        assert_eq!(call.type_code(), None);
        assert_eq!(call.plugin_package_name(), None);
        assert_eq!(call.plugin_user_handle(), None);
        assert_eq!(call.plugin_name(), None);

        assert_eq!(call.interaction_date(), -1);
        assert_eq!(call.view_header(&ctx), None);
        assert_eq!(call.view_footer(&ctx), None);
        assert_eq!(call.view_body(&ctx).as_deref(), Some(""));
        assert!(call.body_icon(&ctx).is_none());
        assert!(call.footer_icon(&ctx).is_none());
        assert_eq!(call.icon(&ctx).unwrap().resource_id(), CALL_LOG_ICON);
        assert_eq!(call.intent(&ctx).data.as_deref(), Some("tel:"));
    }
}
