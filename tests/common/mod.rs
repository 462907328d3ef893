//! Common test utilities shared across integration tests

// Each test binary uses its own slice of these helpers.
#![allow(dead_code)]

use ptp_oxide::codec::PtpWrite;
use ptp_oxide::transport::response;
use ptp_oxide::{CommandReply, Result, Transport};
use std::collections::VecDeque;

/// One expected command and the canned reply to give for it.
pub struct Expectation {
    pub opcode: u16,
    pub params: Vec<u32>,
    pub data: Option<Vec<u8>>,
    pub reply: CommandReply,
}

/// A transport that replays a scripted PTP exchange, asserting every
/// command the engine issues against the script. An unscripted command
/// panics the test.
#[derive(Default)]
pub struct ScriptedTransport {
    script: VecDeque<Expectation>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        // `RUST_LOG=trace cargo test` shows the engine's command log.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        ScriptedTransport::default()
    }

    pub fn expect(
        mut self,
        opcode: u16,
        params: &[u32],
        data: Option<&[u8]>,
        result_code: u32,
        reply_data: &[u8],
    ) -> Self {
        self.script.push_back(Expectation {
            opcode,
            params: params.to_vec(),
            data: data.map(<[u8]>::to_vec),
            reply: CommandReply {
                result_code,
                data: reply_data.to_vec(),
            },
        });
        self
    }

    pub fn expect_ok(
        self,
        opcode: u16,
        params: &[u32],
        data: Option<&[u8]>,
        reply_data: &[u8],
    ) -> Self {
        self.expect(opcode, params, data, response::OK, reply_data)
    }

}

impl Drop for ScriptedTransport {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            assert!(
                self.script.is_empty(),
                "{} scripted commands never issued",
                self.script.len()
            );
        }
    }
}

impl Transport for ScriptedTransport {
    fn send_command(
        &mut self,
        opcode: u16,
        params: &[u32],
        data: Option<&[u8]>,
        _recv_capacity: usize,
    ) -> Result<CommandReply> {
        let expected = self
            .script
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected PTP command 0x{opcode:04x}"));
        assert_eq!(opcode, expected.opcode, "wrong opcode issued");
        assert_eq!(params, expected.params.as_slice(), "wrong parameters");
        assert_eq!(data, expected.data.as_deref(), "wrong outbound data");
        Ok(expected.reply)
    }
}

/// A minimal GetDeviceInfo dataset: empty description, the given
/// operations and properties, no events or formats.
pub fn device_info_dataset(
    vendor_id: u32,
    manufacturer: &str,
    model: &str,
    operations: &[u16],
    properties: &[u16],
) -> Vec<u8> {
    let mut raw = Vec::new();
    raw.extend_from_slice(&100u16.to_le_bytes());
    raw.extend_from_slice(&vendor_id.to_le_bytes());
    raw.extend_from_slice(&3u16.to_le_bytes());
    raw.write_ptp_string("").unwrap();
    raw.extend_from_slice(&0u16.to_le_bytes());
    raw.write_ptp_u16_array(operations).unwrap();
    raw.write_ptp_u16_array(&[]).unwrap(); // events
    raw.write_ptp_u16_array(properties).unwrap();
    raw.write_ptp_u16_array(&[]).unwrap(); // capture formats
    raw.write_ptp_u16_array(&[]).unwrap(); // image formats
    raw.write_ptp_string(manufacturer).unwrap();
    raw.write_ptp_string(model).unwrap();
    raw.write_ptp_string("V1.00").unwrap();
    raw.write_ptp_string("0000001").unwrap();
    raw
}

/// A DevicePropDesc dataset for a u8 RANGE property.
pub fn u8_range_desc(
    code: u16,
    get_set: u8,
    factory: u8,
    current: u8,
    min: u8,
    max: u8,
    step: u8,
) -> Vec<u8> {
    let mut raw = Vec::new();
    raw.extend_from_slice(&code.to_le_bytes());
    raw.extend_from_slice(&0x0002u16.to_le_bytes());
    raw.push(get_set);
    raw.push(factory);
    raw.push(current);
    raw.push(0x01); // RANGE
    raw.extend_from_slice(&[min, max, step]);
    raw
}

/// A DevicePropDesc dataset for a u8 ENUM property.
pub fn u8_enum_desc(code: u16, get_set: u8, factory: u8, current: u8, values: &[u8]) -> Vec<u8> {
    let mut raw = Vec::new();
    raw.extend_from_slice(&code.to_le_bytes());
    raw.extend_from_slice(&0x0002u16.to_le_bytes());
    raw.push(get_set);
    raw.push(factory);
    raw.push(current);
    raw.push(0x02); // ENUM
    raw.extend_from_slice(&(values.len() as u16).to_le_bytes());
    raw.extend_from_slice(values);
    raw
}

/// A DevicePropDesc dataset for a u16 ENUM property.
pub fn u16_enum_desc(code: u16, get_set: u8, factory: u16, current: u16, values: &[u16]) -> Vec<u8> {
    let mut raw = Vec::new();
    raw.extend_from_slice(&code.to_le_bytes());
    raw.extend_from_slice(&0x0004u16.to_le_bytes());
    raw.push(get_set);
    raw.extend_from_slice(&factory.to_le_bytes());
    raw.extend_from_slice(&current.to_le_bytes());
    raw.push(0x02); // ENUM
    raw.extend_from_slice(&(values.len() as u16).to_le_bytes());
    for &val in values {
        raw.extend_from_slice(&val.to_le_bytes());
    }
    raw
}
