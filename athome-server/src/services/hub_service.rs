use athome_api::models::{ActionGroup, Device, Id, Manufacturer, Program};
use athome_api::restful::{
    AvailableDevice, CommandResponse, CreateDeviceRequest, ProgramRequest, UpdateDeviceRequest,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::configs::Hub;
use crate::errors::HubError;

/// One-shot JSON request client for the automation hub.
///
/// The hub serves exactly one `{"request": ..., "args": {...}}` exchange per
/// TCP connection and closes the socket after responding, so the client
/// opens a fresh connection per request and holds no state between calls.
pub struct HubClient {
    config: Hub,
}

impl HubClient {
    pub fn new(config: Hub) -> Self {
        Self { config }
    }

    /// Sends one command to the hub and returns the parsed response object.
    pub async fn send_command(&self, command: &str, args: Value) -> Result<Value, HubError> {
        let payload = serde_json::to_vec(&json!({ "request": command, "args": args }))?;

        let exchange = async {
            let mut stream =
                TcpStream::connect((self.config.host.as_str(), self.config.port)).await?;
            stream.write_all(&payload).await?;
            tracing::debug!(command, "Sent hub request");
            read_json_object(&mut stream).await.map_err(HubError::from)
        };

        let raw = tokio::time::timeout(self.config.timeout(), exchange)
            .await
            .map_err(|_| HubError::Timeout)??;

        let response: Value = serde_json::from_slice(&raw)?;

        // A nonzero result-code is the hub's way of rejecting a request
        if let Some(code) = response.get("result-code").and_then(Value::as_i64) {
            if code != 0 {
                let message = response
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unspecified hub error")
                    .to_string();
                return Err(HubError::Rejected(message));
            }
        }

        Ok(response)
    }

    /// Sends a command and deserializes one named field of the response.
    async fn query<T: DeserializeOwned>(
        &self,
        command: &str,
        args: Value,
        field: &'static str,
    ) -> Result<T, HubError> {
        let response = self.send_command(command, args).await?;
        let value = response
            .get(field)
            .cloned()
            .ok_or(HubError::MissingField(field))?;

        Ok(serde_json::from_value(value)?)
    }

    /// Sends a command and relays the hub's result message.
    async fn command(&self, command: &str, args: Value) -> Result<CommandResponse, HubError> {
        let response = self.send_command(command, args).await?;
        let message = response
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("OK")
            .to_string();

        Ok(CommandResponse { message })
    }

    pub async fn get_all_devices(&self) -> Result<Vec<Device>, HubError> {
        self.query("QueryDevices", json!({}), "devices").await
    }

    pub async fn get_device(&self, device_id: Id) -> Result<Device, HubError> {
        self.query("QueryDevices", json!({ "device-id": device_id }), "device")
            .await
    }

    pub async fn get_available_devices(
        &self,
        mfg: Manufacturer,
    ) -> Result<Vec<AvailableDevice>, HubError> {
        self.query(
            "QueryAvailableDevices",
            json!({ "type": mfg.to_string() }),
            "devices",
        )
        .await
    }

    pub async fn define_device(&self, device: &CreateDeviceRequest) -> Result<Device, HubError> {
        self.query(
            "DefineDevice",
            json!({
                "device-name": device.name,
                "device-location": device.location,
                "device-mfg": device.mfg.to_string(),
                "device-address": device.address,
                "device-channel": device.channel,
                "device-selected": device.selected,
            }),
            "device",
        )
        .await
    }

    pub async fn update_device(
        &self,
        device_id: Id,
        device: &UpdateDeviceRequest,
    ) -> Result<Device, HubError> {
        self.query(
            "UpdateDevice",
            json!({
                "device-id": device_id,
                "device-name": device.name,
                "device-location": device.location,
                "device-mfg": device.mfg.to_string(),
                "device-address": device.address,
                "device-channel": device.channel,
                "device-selected": device.selected,
            }),
            "device",
        )
        .await
    }

    pub async fn delete_device(&self, device_id: Id) -> Result<CommandResponse, HubError> {
        self.command("DeleteDevice", json!({ "device-id": device_id }))
            .await
    }

    pub async fn device_on(&self, device_id: Id) -> Result<CommandResponse, HubError> {
        self.command("On", json!({ "device-id": device_id, "dim-amount": 0 }))
            .await
    }

    pub async fn device_off(&self, device_id: Id) -> Result<CommandResponse, HubError> {
        self.command("Off", json!({ "device-id": device_id, "dim-amount": 0 }))
            .await
    }

    pub async fn selected_devices_on(&self) -> Result<CommandResponse, HubError> {
        self.command("SelectedDevicesOn", json!({})).await
    }

    pub async fn selected_devices_off(&self) -> Result<CommandResponse, HubError> {
        self.command("SelectedDevicesOff", json!({})).await
    }

    pub async fn discover_devices(&self) -> Result<CommandResponse, HubError> {
        self.command("DiscoverDevices", json!({})).await
    }

    pub async fn get_all_programs(&self) -> Result<Vec<Program>, HubError> {
        self.query("QueryPrograms", json!({}), "programs").await
    }

    pub async fn get_program(&self, program_id: Id) -> Result<Program, HubError> {
        self.query(
            "QueryDeviceProgram",
            json!({ "program-id": program_id }),
            "program",
        )
        .await
    }

    pub async fn get_device_programs(&self, device_id: Id) -> Result<Vec<Program>, HubError> {
        self.query(
            "QueryDevicePrograms",
            json!({ "device-id": device_id }),
            "programs",
        )
        .await
    }

    pub async fn get_available_programs(&self, device_id: Id) -> Result<Vec<Program>, HubError> {
        self.query(
            "QueryAvailablePrograms",
            json!({ "device-id": device_id }),
            "programs",
        )
        .await
    }

    pub async fn define_program(
        &self,
        device_id: Id,
        program: &ProgramRequest,
    ) -> Result<Program, HubError> {
        self.query(
            "DefineProgram",
            program_args(Some(device_id), None, program),
            "program",
        )
        .await
    }

    pub async fn update_program(
        &self,
        program_id: Id,
        program: &ProgramRequest,
    ) -> Result<Program, HubError> {
        self.query(
            "UpdateProgram",
            program_args(None, Some(program_id), program),
            "program",
        )
        .await
    }

    pub async fn delete_program(&self, program_id: Id) -> Result<CommandResponse, HubError> {
        self.command("DeleteProgram", json!({ "program-id": program_id }))
            .await
    }

    pub async fn delete_device_program(
        &self,
        device_id: Id,
        program_id: Id,
    ) -> Result<CommandResponse, HubError> {
        self.command(
            "DeleteDeviceProgram",
            json!({ "device-id": device_id, "program-id": program_id }),
        )
        .await
    }

    pub async fn assign_program(
        &self,
        device_id: Id,
        program_id: Id,
    ) -> Result<CommandResponse, HubError> {
        self.command(
            "AssignProgram",
            json!({ "device-id": device_id, "program-id": program_id }),
        )
        .await
    }

    pub async fn assign_program_to_group(
        &self,
        group_id: Id,
        program_id: Id,
    ) -> Result<CommandResponse, HubError> {
        self.command(
            "AssignProgramToGroup",
            json!({ "group-id": group_id, "program-id": program_id }),
        )
        .await
    }

    pub async fn get_all_action_groups(&self) -> Result<Vec<ActionGroup>, HubError> {
        self.query("QueryActionGroups", json!({}), "groups").await
    }

    pub async fn get_action_group(&self, group_id: Id) -> Result<ActionGroup, HubError> {
        self.query("QueryActionGroup", json!({ "group-id": group_id }), "group")
            .await
    }

    pub async fn define_action_group(&self, name: &str) -> Result<ActionGroup, HubError> {
        self.query("DefineActionGroup", json!({ "group-name": name }), "group")
            .await
    }

    pub async fn update_action_group(
        &self,
        group_id: Id,
        name: &str,
    ) -> Result<ActionGroup, HubError> {
        self.query(
            "UpdateActionGroup",
            json!({ "group-id": group_id, "group-name": name }),
            "group",
        )
        .await
    }

    pub async fn delete_action_group(&self, group_id: Id) -> Result<CommandResponse, HubError> {
        self.command("DeleteActionGroup", json!({ "group-id": group_id }))
            .await
    }

    pub async fn get_action_group_devices(&self, group_id: Id) -> Result<Vec<Device>, HubError> {
        self.query(
            "QueryActionGroupDevices",
            json!({ "group-id": group_id }),
            "devices",
        )
        .await
    }

    pub async fn get_available_group_devices(
        &self,
        group_id: Id,
    ) -> Result<Vec<Device>, HubError> {
        self.query(
            "QueryAvailableGroupDevices",
            json!({ "group-id": group_id }),
            "devices",
        )
        .await
    }

    pub async fn assign_device_to_group(
        &self,
        group_id: Id,
        device_id: Id,
    ) -> Result<CommandResponse, HubError> {
        self.command(
            "AssignDevice",
            json!({ "group-id": group_id, "device-id": device_id }),
        )
        .await
    }

    pub async fn delete_action_group_device(
        &self,
        group_id: Id,
        device_id: Id,
    ) -> Result<CommandResponse, HubError> {
        self.command(
            "DeleteActionGroupDevice",
            json!({ "group-id": group_id, "device-id": device_id }),
        )
        .await
    }

    pub async fn group_on(&self, group_id: Id) -> Result<CommandResponse, HubError> {
        self.command("GroupOn", json!({ "group-id": group_id })).await
    }

    pub async fn group_off(&self, group_id: Id) -> Result<CommandResponse, HubError> {
        self.command("GroupOff", json!({ "group-id": group_id })).await
    }
}

/// Builds define/update program args in the hub's dialect. The key set is
/// historical: kebab-case throughout except `dimamount`, and updates carry
/// the program id as plain `id`.
fn program_args(device_id: Option<Id>, program_id: Option<Id>, program: &ProgramRequest) -> Value {
    let mut args = json!({
        "name": program.name,
        "day-mask": program.day_mask.to_string(),
        "trigger-method": program.trigger_method,
        "time": program.time,
        "offset": program.offset,
        "randomize": program.randomize,
        "randomize-amount": program.randomize_amount,
        "command": program.command.to_string(),
        "dimamount": program.dim_amount,
    });

    if let Some(device_id) = device_id {
        args["device-id"] = json!(device_id);
    }
    if let Some(program_id) = program_id {
        args["id"] = json!(program_id);
    }

    args
}

/// Reads one JSON object from the stream by brace balancing, honoring
/// string literals and escapes. The hub writes a single object and may
/// close the socket without any terminator.
async fn read_json_object(stream: &mut TcpStream) -> Result<Vec<u8>, std::io::Error> {
    let mut data = Vec::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut started = false;
    let mut buf = [0u8; 4096];

    loop {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            // EOF; let the JSON parser report truncation if the object is short
            return Ok(data);
        }

        for &byte in &buf[..n] {
            data.push(byte);

            if in_string {
                if escaped {
                    escaped = false;
                } else if byte == b'\\' {
                    escaped = true;
                } else if byte == b'"' {
                    in_string = false;
                }
                continue;
            }

            match byte {
                b'"' => in_string = true,
                b'{' => {
                    depth += 1;
                    started = true;
                }
                b'}' => {
                    depth = depth.saturating_sub(1);
                    if started && depth == 0 {
                        return Ok(data);
                    }
                }
                _ => {}
            }
        }
    }
}
