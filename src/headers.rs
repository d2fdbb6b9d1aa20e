pub(crate) struct RequestHeaders;
pub(crate) struct ResponseHeaders;

impl RequestHeaders {
    pub(crate) const HX_REQUEST: &'static str = "HX-Request";
    pub(crate) const HX_BOOSTED: &'static str = "HX-Boosted";
    pub(crate) const HX_CURRENT_URL: &'static str = "HX-Current-Url";
    pub(crate) const HX_HISTORY_RESTORE_REQUEST: &'static str = "HX-History-Restore-Request";
    pub(crate) const HX_PROMPT: &'static str = "HX-Prompt";
    pub(crate) const HX_TARGET: &'static str = "HX-Target";
    pub(crate) const HX_TRIGGER: &'static str = "HX-Trigger";
    pub(crate) const HX_TRIGGER_NAME: &'static str = "HX-Trigger-Name";
}

impl ResponseHeaders {
    pub(crate) const HX_LOCATION: &'static str = "HX-Location";
    pub(crate) const HX_PUSH_URL: &'static str = "HX-Push-Url";
    pub(crate) const HX_REDIRECT: &'static str = "HX-Redirect";
    pub(crate) const HX_REFRESH: &'static str = "HX-Refresh";
    pub(crate) const HX_REPLACE_URL: &'static str = "HX-Replace-Url";
    pub(crate) const HX_RESWAP: &'static str = "HX-Reswap";
    pub(crate) const HX_RETARGET: &'static str = "HX-Retarget";
    pub(crate) const HX_RESELECT: &'static str = "HX-Reselect";
    pub(crate) const HX_TRIGGER: &'static str = "HX-Trigger";
    pub(crate) const HX_TRIGGER_AFTER_SETTLE: &'static str = "HX-Trigger-After-Settle";
    pub(crate) const HX_TRIGGER_AFTER_SWAP: &'static str = "HX-Trigger-After-Swap";
}
