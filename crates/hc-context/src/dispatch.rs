//! Turns a processed command into a single-device control plan.
//!
//! Planning picks the target (explicit override or top-ranked match), maps the
//! intent and parameters onto a `DeviceCommand`, and checks the device can
//! actually do it. Nothing is executed here.

use hc_protocol::{
    Capabilities, ControlPlan, DeviceCommand, DeviceId, DeviceMatch, DeviceRecord,
    Intent, Parameters, ProcessedContext, Rgb,
};
use hc_taxonomy::CategoryCatalog;

use crate::config::DispatchConfig;
use crate::error::{DispatchError, DispatchResult};
use crate::snapshot::Snapshot;

/// Per-call planning options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Target this device regardless of ranking.
    pub force_device_id: Option<DeviceId>,
}

impl DispatchOptions {
    pub fn forced(id: DeviceId) -> Self {
        Self {
            force_device_id: Some(id),
        }
    }
}

/// Build a control plan for `ctx` against the given snapshot.
pub fn plan(
    ctx: &ProcessedContext,
    snapshot: &Snapshot,
    catalog: &dyn CategoryCatalog,
    config: &DispatchConfig,
    options: &DispatchOptions,
) -> DispatchResult<ControlPlan> {
    if !ctx.intent.is_known() {
        return Err(DispatchError::UnknownIntent);
    }

    let (target, forced) = select_target(ctx, snapshot, config, options)?;
    let command = build_command(target.id, ctx.intent, &ctx.parameters)?;

    let capabilities = target
        .capabilities
        .clone()
        .unwrap_or_else(|| catalog.capabilities(target.category));
    if !supports(target, &capabilities, &command) {
        return Err(DispatchError::Unsupported {
            device_id: target.id,
            intent: ctx.intent,
        });
    }

    let alternatives: Vec<DeviceMatch> = ctx
        .device_matches
        .iter()
        .filter(|m| m.device.id != target.id)
        .cloned()
        .collect();

    tracing::debug!(
        device_id = target.id,
        intent = %ctx.intent,
        forced,
        alternatives = alternatives.len(),
        "planned device command"
    );

    Ok(ControlPlan {
        device_id: target.id,
        device_name: target.name.clone(),
        intent: ctx.intent,
        command,
        forced,
        alternatives,
    })
}

fn select_target<'a>(
    ctx: &'a ProcessedContext,
    snapshot: &'a Snapshot,
    config: &DispatchConfig,
    options: &DispatchOptions,
) -> DispatchResult<(&'a DeviceRecord, bool)> {
    if let Some(id) = options.force_device_id {
        let device = snapshot
            .device(id)
            .ok_or(DispatchError::DeviceNotFound { id })?;
        return Ok((device, true));
    }

    let mut ranked = ctx.device_matches.iter();
    let top = ranked.next().ok_or(DispatchError::NoDeviceMatched)?;

    if let Some(runner_up) = ranked.next()
        && top.confidence - runner_up.confidence < config.ambiguity_margin
    {
        let candidates = ctx
            .device_matches
            .iter()
            .filter(|m| top.confidence - m.confidence < config.ambiguity_margin)
            .map(|m| m.device.id)
            .collect();
        return Err(DispatchError::Ambiguous { candidates });
    }

    Ok((&top.device, false))
}

fn build_command(
    device_id: DeviceId,
    intent: Intent,
    params: &Parameters,
) -> DispatchResult<DeviceCommand> {
    let missing = |parameter| DispatchError::MissingParameter { intent, parameter };

    let command = match intent {
        Intent::TurnOn => DeviceCommand::TurnOn,
        Intent::TurnOff => DeviceCommand::TurnOff,
        Intent::SetBrightness => DeviceCommand::SetBrightness {
            level: params.brightness.ok_or_else(|| missing("brightness"))?,
        },
        Intent::SetColor => {
            let color = params.color().ok_or_else(|| missing("color"))?;
            DeviceCommand::SetColor {
                color,
                rgb: Rgb::from(color),
            }
        }
        Intent::ControlCover => match (params.position, params.action) {
            (Some(position), _) => DeviceCommand::SetPosition { position },
            (None, Some(action)) => DeviceCommand::Cover { action },
            (None, None) => return Err(missing("position or action")),
        },
        Intent::SetTemperature => DeviceCommand::SetTemperature {
            target: params.temperature.ok_or_else(|| missing("temperature"))?,
        },
        Intent::Lock => DeviceCommand::Lock,
        Intent::Unlock => DeviceCommand::Unlock,
        Intent::GetStatus => DeviceCommand::ReadStatus,
        Intent::GetSensorData => DeviceCommand::ReadSensor,
        // Fan-out is the caller's job; one plan targets one device.
        Intent::BatchControl | Intent::Unknown => {
            return Err(DispatchError::Unsupported { device_id, intent });
        }
    };
    Ok(command)
}

fn supports(device: &DeviceRecord, caps: &Capabilities, command: &DeviceCommand) -> bool {
    let has_action = |action: &str| caps.supported_actions.iter().any(|a| a == action);

    match command {
        DeviceCommand::TurnOn => caps.can_turn_on,
        DeviceCommand::TurnOff => caps.can_turn_off,
        DeviceCommand::SetBrightness { .. } => caps.can_set_brightness,
        DeviceCommand::SetColor { .. } => caps.can_set_color,
        DeviceCommand::SetPosition { .. } => caps.can_set_position,
        DeviceCommand::Cover { action } => has_action(action.as_str()),
        DeviceCommand::SetTemperature { .. } => caps.can_set_temperature,
        DeviceCommand::Lock => has_action("secure"),
        DeviceCommand::Unlock => has_action("unsecure"),
        DeviceCommand::ReadStatus => caps.can_read_value,
        DeviceCommand::ReadSensor => caps.can_read_value && device.category.is_sensor(),
    }
}
