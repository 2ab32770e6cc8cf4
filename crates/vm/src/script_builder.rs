// Copyright (C) 2015-2025 The Neo Project.
//
// script_builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Script builder for Neo N3 invocation scripts.
//!
//! Every emit operation is total: arguments that the remote VM would refuse
//! (oversized integers, wrong arity) are still encoded and left for the node
//! to reject when it runs the script.

use crate::call_flags::CallFlags;
use crate::contract_parameter::ContractParameter;
use crate::op_code::{OpCode, STACK_ITEM_TYPE_INTEGER};
use neo_nft_primitives::UInt160;
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;
use sha2::{Digest, Sha256};

/// Interop service invoked by dynamic contract calls.
pub const SYSTEM_CONTRACT_CALL: &str = "System.Contract.Call";

/// Interop service checking a single signature.
pub const SYSTEM_CRYPTO_CHECK_SIG: &str = "System.Crypto.CheckSig";

/// Computes the interop hash of a syscall name: the first four bytes of
/// `SHA256(name)` read as a little-endian `u32`.
pub fn interop_hash(api: &str) -> u32 {
    let digest = Sha256::digest(api.as_bytes());
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Helps construct VM scripts programmatically.
#[derive(Debug, Default, Clone)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn emit_opcode(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    #[inline]
    pub fn emit_instruction(&mut self, opcode: OpCode, operand: &[u8]) -> &mut Self {
        self.emit_opcode(opcode);
        self.script.extend_from_slice(operand);
        self
    }

    /// Pushes a byte string using the smallest `PUSHDATA` form.
    pub fn emit_push(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();

        if len <= 0xFF {
            self.emit_instruction(OpCode::PUSHDATA1, &[len as u8]);
        } else if len <= 0xFFFF {
            self.emit_instruction(OpCode::PUSHDATA2, &(len as u16).to_le_bytes());
        } else {
            self.emit_instruction(OpCode::PUSHDATA4, &(len as u32).to_le_bytes());
        }
        self.script.extend_from_slice(data);
        self
    }

    #[inline]
    pub fn emit_push_string(&mut self, value: &str) -> &mut Self {
        self.emit_push(value.as_bytes())
    }

    #[inline]
    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        if value {
            self.emit_opcode(OpCode::PUSHT)
        } else {
            self.emit_opcode(OpCode::PUSHF)
        }
    }

    #[inline]
    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        self.emit_push_integer(&BigInt::from(value))
    }

    /// Pushes an arbitrary precision integer.
    ///
    /// `-1..=16` use the single-byte constants, values up to 32 bytes use the
    /// narrowest `PUSHINT*`, anything wider is pushed as bytes and converted
    /// so the remote VM reports the overflow.
    pub fn emit_push_integer(&mut self, value: &BigInt) -> &mut Self {
        if let Some(small) = value.to_i8().filter(|v| (-1..=16).contains(v)) {
            let opcode = OpCode::PUSH0 as i16 + i16::from(small);
            self.script.push(opcode as u8);
            return self;
        }

        let bytes = value.to_signed_bytes_le();
        let negative = matches!(value.sign(), Sign::Minus);
        let (opcode, width) = match bytes.len() {
            0..=1 => (OpCode::PUSHINT8, 1),
            2 => (OpCode::PUSHINT16, 2),
            3..=4 => (OpCode::PUSHINT32, 4),
            5..=8 => (OpCode::PUSHINT64, 8),
            9..=16 => (OpCode::PUSHINT128, 16),
            17..=32 => (OpCode::PUSHINT256, 32),
            _ => {
                self.emit_push(&bytes);
                return self.emit_instruction(OpCode::CONVERT, &[STACK_ITEM_TYPE_INTEGER]);
            }
        };

        let padded = pad_signed(&bytes, width, negative);
        self.emit_instruction(opcode, &padded)
    }

    #[inline]
    pub fn emit_push_hash160(&mut self, hash: &UInt160) -> &mut Self {
        self.emit_push(hash.as_bytes())
    }

    /// Pushes one typed contract argument.
    pub fn emit_push_parameter(&mut self, parameter: &ContractParameter) -> &mut Self {
        match parameter {
            ContractParameter::Hash160(hash) => self.emit_push_hash160(hash),
            ContractParameter::ByteArray(bytes) => self.emit_push(bytes),
            ContractParameter::String(value) => self.emit_push_string(value),
            ContractParameter::Integer(value) => self.emit_push_integer(value),
            ContractParameter::Boolean(value) => self.emit_push_bool(*value),
            ContractParameter::Array(items) => self.emit_create_array(items),
        }
    }

    /// Builds an array on the stack whose element `0` is `items[0]`.
    pub fn emit_create_array(&mut self, items: &[ContractParameter]) -> &mut Self {
        if items.is_empty() {
            return self.emit_opcode(OpCode::NEWARRAY0);
        }
        for item in items.iter().rev() {
            self.emit_push_parameter(item);
        }
        self.emit_push_int(items.len() as i64);
        self.emit_opcode(OpCode::PACK)
    }

    #[inline]
    pub fn emit_syscall(&mut self, api: &str) -> &mut Self {
        self.emit_instruction(OpCode::SYSCALL, &interop_hash(api).to_le_bytes())
    }

    /// Emits `System.Contract.Call` of `method` on `contract` with `CallFlags::ALL`.
    pub fn emit_dynamic_call(
        &mut self,
        contract: &UInt160,
        method: &str,
        args: &[ContractParameter],
    ) -> &mut Self {
        self.emit_create_array(args);
        self.emit_push_int(i64::from(CallFlags::ALL.bits()));
        self.emit_push_string(method);
        self.emit_push_hash160(contract);
        self.emit_syscall(SYSTEM_CONTRACT_CALL)
    }

    #[inline]
    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.script.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

fn pad_signed(bytes: &[u8], target_len: usize, negative: bool) -> Vec<u8> {
    let mut padded = Vec::with_capacity(target_len);
    padded.extend_from_slice(bytes);
    let fill = if negative { 0xFF } else { 0x00 };
    padded.resize(target_len, fill);
    padded
}
