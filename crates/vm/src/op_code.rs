// Copyright (C) 2015-2025 The Neo Project.
//
// op_code.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The subset of Neo N3 opcodes emitted by the client.

/// Neo N3 instruction opcodes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
pub enum OpCode {
    // Constants
    PUSHINT8 = 0x00,
    PUSHINT16 = 0x01,
    PUSHINT32 = 0x02,
    PUSHINT64 = 0x03,
    PUSHINT128 = 0x04,
    PUSHINT256 = 0x05,
    PUSHT = 0x08,
    PUSHF = 0x09,
    PUSHNULL = 0x0B,
    PUSHDATA1 = 0x0C,
    PUSHDATA2 = 0x0D,
    PUSHDATA4 = 0x0E,
    PUSHM1 = 0x0F,
    PUSH0 = 0x10,
    PUSH1 = 0x11,
    PUSH2 = 0x12,
    PUSH3 = 0x13,
    PUSH4 = 0x14,
    PUSH5 = 0x15,
    PUSH6 = 0x16,
    PUSH7 = 0x17,
    PUSH8 = 0x18,
    PUSH9 = 0x19,
    PUSH10 = 0x1A,
    PUSH11 = 0x1B,
    PUSH12 = 0x1C,
    PUSH13 = 0x1D,
    PUSH14 = 0x1E,
    PUSH15 = 0x1F,
    PUSH16 = 0x20,

    // Flow control
    RET = 0x40,
    SYSCALL = 0x41,

    // Compound types
    PACK = 0xC0,
    NEWARRAY0 = 0xC2,

    // Types
    CONVERT = 0xDB,
}

/// Stack item type byte used as the `CONVERT` operand.
pub const STACK_ITEM_TYPE_INTEGER: u8 = 0x21;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_integer_opcodes_are_contiguous() {
        assert_eq!(OpCode::PUSH0 as u8 + 15, OpCode::PUSH15 as u8);
        assert_eq!(OpCode::PUSH0 as u8 + 16, OpCode::PUSH16 as u8);
        assert_eq!(OpCode::PUSHM1 as u8 + 1, OpCode::PUSH0 as u8);
    }
}
