//! Static per-mode register scripts.
//!
//! Each table puts the sensor into software standby, loads global timing, black
//! level, PLL and readout geometry for its resolution, then re-enables
//! streaming. Entry order matters: the PLL must settle and standby must exit
//! before streaming starts. Frame length (`0x0340`/`0x0341`) is the table
//! default and is normally replaced by an override at mode set.

use crate::registers::{RegisterEntry, MODE_SELECT, STANDBY_SETTLE_MS};

/// 4208x3120 readout.
pub static MODE_4208X3120: &[RegisterEntry] = &[
    // software standby
    RegisterEntry::write(MODE_SELECT, 0x00),
    RegisterEntry::wait(STANDBY_SETTLE_MS),
    // global timing
    RegisterEntry::write(0x3087, 0x53),
    RegisterEntry::write(0x309D, 0x94),
    RegisterEntry::write(0x30A1, 0x08),
    RegisterEntry::write(0x30C7, 0x00),
    RegisterEntry::write(0x3115, 0x0E),
    RegisterEntry::write(0x3118, 0x42),
    RegisterEntry::write(0x311D, 0x34),
    RegisterEntry::write(0x3121, 0x0D),
    RegisterEntry::write(0x3212, 0xF2),
    RegisterEntry::write(0x3213, 0x0F),
    RegisterEntry::write(0x3215, 0x0F),
    RegisterEntry::write(0x3217, 0x0B),
    RegisterEntry::write(0x3219, 0x0B),
    RegisterEntry::write(0x321B, 0x0D),
    RegisterEntry::write(0x321D, 0x0D),
    // black level
    RegisterEntry::write(0x3032, 0x40),
    // pll
    RegisterEntry::write(0x0305, 0x02),
    RegisterEntry::write(0x0307, 0x2F),
    RegisterEntry::write(0x30A4, 0x02),
    RegisterEntry::write(0x303C, 0x4B),
    // readout geometry
    RegisterEntry::write(0x0112, 0x0A),
    RegisterEntry::write(0x0113, 0x0A),
    RegisterEntry::write(0x0340, 0x0C),
    RegisterEntry::write(0x0341, 0x4A),
    RegisterEntry::write(0x0342, 0x12),
    RegisterEntry::write(0x0343, 0x0C),
    RegisterEntry::write(0x0344, 0x00),
    RegisterEntry::write(0x0345, 0x08),
    RegisterEntry::write(0x0346, 0x00),
    RegisterEntry::write(0x0347, 0x30),
    RegisterEntry::write(0x0348, 0x10),
    RegisterEntry::write(0x0349, 0x77),
    RegisterEntry::write(0x034A, 0x0C),
    RegisterEntry::write(0x034B, 0x5F),
    RegisterEntry::write(0x034C, 0x10),
    RegisterEntry::write(0x034D, 0x70),
    RegisterEntry::write(0x034E, 0x0C),
    RegisterEntry::write(0x034F, 0x30),
    RegisterEntry::write(0x0381, 0x01),
    RegisterEntry::write(0x0383, 0x01),
    RegisterEntry::write(0x0385, 0x01),
    RegisterEntry::write(0x0387, 0x01),
    RegisterEntry::write(0x3033, 0x00),
    RegisterEntry::write(0x303D, 0x10),
    RegisterEntry::write(0x303E, 0xD0),
    RegisterEntry::write(0x3040, 0x08),
    RegisterEntry::write(0x3041, 0x97),
    RegisterEntry::write(0x3048, 0x00),
    RegisterEntry::write(0x304C, 0x7F),
    RegisterEntry::write(0x304D, 0x04),
    RegisterEntry::write(0x3064, 0x12),
    RegisterEntry::write(0x309B, 0x20),
    RegisterEntry::write(0x309E, 0x00),
    RegisterEntry::write(0x30D5, 0x00),
    RegisterEntry::write(0x30D6, 0x85),
    RegisterEntry::write(0x30D7, 0x2A),
    RegisterEntry::write(0x30D8, 0x64),
    RegisterEntry::write(0x30D9, 0x89),
    RegisterEntry::write(0x30DE, 0x00),
    RegisterEntry::write(0x3102, 0x10),
    RegisterEntry::write(0x3103, 0x44),
    RegisterEntry::write(0x3104, 0x40),
    RegisterEntry::write(0x3105, 0x00),
    RegisterEntry::write(0x3106, 0x0D),
    RegisterEntry::write(0x3107, 0x01),
    RegisterEntry::write(0x310A, 0x0A),
    RegisterEntry::write(0x315C, 0x99),
    RegisterEntry::write(0x315D, 0x98),
    RegisterEntry::write(0x316E, 0x9A),
    RegisterEntry::write(0x316F, 0x99),
    RegisterEntry::write(0x3301, 0x03),
    RegisterEntry::write(0x3304, 0x05),
    RegisterEntry::write(0x3305, 0x04),
    RegisterEntry::write(0x3306, 0x12),
    RegisterEntry::write(0x3307, 0x03),
    RegisterEntry::write(0x3308, 0x0D),
    RegisterEntry::write(0x3309, 0x05),
    RegisterEntry::write(0x330A, 0x09),
    RegisterEntry::write(0x330B, 0x04),
    RegisterEntry::write(0x330C, 0x08),
    RegisterEntry::write(0x330D, 0x05),
    RegisterEntry::write(0x330E, 0x03),
    RegisterEntry::write(0x3318, 0x64),
    RegisterEntry::write(0x3322, 0x02),
    RegisterEntry::write(0x3342, 0x0F),
    RegisterEntry::write(0x3348, 0xE0),
    RegisterEntry::write(0x0101, 0x03),
    // streaming
    RegisterEntry::write(MODE_SELECT, 0x01),
    RegisterEntry::wait(STANDBY_SETTLE_MS),
    RegisterEntry::END,
];

/// 2104x1560 readout.
pub static MODE_2104X1560: &[RegisterEntry] = &[
    // software standby
    RegisterEntry::write(MODE_SELECT, 0x00),
    RegisterEntry::wait(STANDBY_SETTLE_MS),
    // global timing
    RegisterEntry::write(0x3087, 0x53),
    RegisterEntry::write(0x309D, 0x94),
    RegisterEntry::write(0x30A1, 0x08),
    RegisterEntry::write(0x30C7, 0x00),
    RegisterEntry::write(0x3115, 0x0E),
    RegisterEntry::write(0x3118, 0x42),
    RegisterEntry::write(0x311D, 0x34),
    RegisterEntry::write(0x3121, 0x0D),
    RegisterEntry::write(0x3212, 0xF2),
    RegisterEntry::write(0x3213, 0x0F),
    RegisterEntry::write(0x3215, 0x0F),
    RegisterEntry::write(0x3217, 0x0B),
    RegisterEntry::write(0x3219, 0x0B),
    RegisterEntry::write(0x321B, 0x0D),
    RegisterEntry::write(0x321D, 0x0D),
    // black level
    RegisterEntry::write(0x3032, 0x40),
    // pll
    RegisterEntry::write(0x0305, 0x02),
    RegisterEntry::write(0x0307, 0x2F),
    RegisterEntry::write(0x30A4, 0x02),
    RegisterEntry::write(0x303C, 0x4B),
    // readout geometry
    RegisterEntry::write(0x0112, 0x0A),
    RegisterEntry::write(0x0113, 0x0A),
    RegisterEntry::write(0x0340, 0x06),
    RegisterEntry::write(0x0341, 0x58),
    RegisterEntry::write(0x0342, 0x12),
    RegisterEntry::write(0x0343, 0x0C),
    RegisterEntry::write(0x0344, 0x00),
    RegisterEntry::write(0x0345, 0x08),
    RegisterEntry::write(0x0346, 0x00),
    RegisterEntry::write(0x0347, 0x30),
    RegisterEntry::write(0x0348, 0x10),
    RegisterEntry::write(0x0349, 0x77),
    RegisterEntry::write(0x034A, 0x0C),
    RegisterEntry::write(0x034B, 0x5F),
    RegisterEntry::write(0x034C, 0x08),
    RegisterEntry::write(0x034D, 0x38),
    RegisterEntry::write(0x034E, 0x06),
    RegisterEntry::write(0x034F, 0x18),
    RegisterEntry::write(0x0381, 0x01),
    RegisterEntry::write(0x0383, 0x03),
    RegisterEntry::write(0x0385, 0x01),
    RegisterEntry::write(0x0387, 0x03),
    RegisterEntry::write(0x3033, 0x00),
    RegisterEntry::write(0x303D, 0x10),
    RegisterEntry::write(0x303E, 0xD0),
    RegisterEntry::write(0x3040, 0x08),
    RegisterEntry::write(0x3041, 0x97),
    RegisterEntry::write(0x3048, 0x01),
    RegisterEntry::write(0x304C, 0x7F),
    RegisterEntry::write(0x304D, 0x04),
    RegisterEntry::write(0x3064, 0x12),
    RegisterEntry::write(0x309B, 0x28),
    RegisterEntry::write(0x309E, 0x00),
    RegisterEntry::write(0x30D5, 0x09),
    RegisterEntry::write(0x30D6, 0x01),
    RegisterEntry::write(0x30D7, 0x01),
    RegisterEntry::write(0x30D8, 0x64),
    RegisterEntry::write(0x30D9, 0x89),
    RegisterEntry::write(0x30DE, 0x02),
    RegisterEntry::write(0x3102, 0x10),
    RegisterEntry::write(0x3103, 0x44),
    RegisterEntry::write(0x3104, 0x40),
    RegisterEntry::write(0x3105, 0x00),
    RegisterEntry::write(0x3106, 0x0D),
    RegisterEntry::write(0x3107, 0x01),
    RegisterEntry::write(0x310A, 0x0A),
    RegisterEntry::write(0x315C, 0x99),
    RegisterEntry::write(0x315D, 0x98),
    RegisterEntry::write(0x316E, 0x9A),
    RegisterEntry::write(0x316F, 0x99),
    RegisterEntry::write(0x3301, 0x03),
    RegisterEntry::write(0x3304, 0x05),
    RegisterEntry::write(0x3305, 0x04),
    RegisterEntry::write(0x3306, 0x12),
    RegisterEntry::write(0x3307, 0x03),
    RegisterEntry::write(0x3308, 0x0D),
    RegisterEntry::write(0x3309, 0x05),
    RegisterEntry::write(0x330A, 0x09),
    RegisterEntry::write(0x330B, 0x04),
    RegisterEntry::write(0x330C, 0x08),
    RegisterEntry::write(0x330D, 0x05),
    RegisterEntry::write(0x330E, 0x03),
    RegisterEntry::write(0x3318, 0x73),
    RegisterEntry::write(0x3322, 0x02),
    RegisterEntry::write(0x3342, 0x0F),
    RegisterEntry::write(0x3348, 0xE0),
    RegisterEntry::write(0x0101, 0x03),
    // streaming
    RegisterEntry::write(MODE_SELECT, 0x01),
    RegisterEntry::wait(STANDBY_SETTLE_MS),
    RegisterEntry::END,
];

/// 524x390 readout.
pub static MODE_524X390: &[RegisterEntry] = &[
    // software standby
    RegisterEntry::write(MODE_SELECT, 0x00),
    RegisterEntry::wait(STANDBY_SETTLE_MS),
    // global timing
    RegisterEntry::write(0x3087, 0x53),
    RegisterEntry::write(0x309D, 0x94),
    RegisterEntry::write(0x30A1, 0x08),
    RegisterEntry::write(0x30C7, 0x00),
    RegisterEntry::write(0x3115, 0x0E),
    RegisterEntry::write(0x3118, 0x42),
    RegisterEntry::write(0x311D, 0x34),
    RegisterEntry::write(0x3121, 0x0D),
    RegisterEntry::write(0x3212, 0xF2),
    RegisterEntry::write(0x3213, 0x0F),
    RegisterEntry::write(0x3215, 0x0F),
    RegisterEntry::write(0x3217, 0x0B),
    RegisterEntry::write(0x3219, 0x0B),
    RegisterEntry::write(0x321B, 0x0D),
    RegisterEntry::write(0x321D, 0x0D),
    // black level
    RegisterEntry::write(0x3032, 0x40),
    // pll
    RegisterEntry::write(0x0305, 0x02),
    RegisterEntry::write(0x0307, 0x2F),
    RegisterEntry::write(0x30A4, 0x02),
    RegisterEntry::write(0x303C, 0x4B),
    // readout geometry
    RegisterEntry::write(0x0112, 0x0A),
    RegisterEntry::write(0x0113, 0x0A),
    RegisterEntry::write(0x0340, 0x01),
    RegisterEntry::write(0x0341, 0x96),
    RegisterEntry::write(0x0342, 0x12),
    RegisterEntry::write(0x0343, 0x0C),
    RegisterEntry::write(0x0344, 0x00),
    RegisterEntry::write(0x0345, 0x10),
    RegisterEntry::write(0x0346, 0x00),
    RegisterEntry::write(0x0347, 0x30),
    RegisterEntry::write(0x0348, 0x10),
    RegisterEntry::write(0x0349, 0x6F),
    RegisterEntry::write(0x034A, 0x0C),
    RegisterEntry::write(0x034B, 0x5F),
    RegisterEntry::write(0x034C, 0x02),
    RegisterEntry::write(0x034D, 0x0C),
    RegisterEntry::write(0x034E, 0x01),
    RegisterEntry::write(0x034F, 0x86),
    RegisterEntry::write(0x0381, 0x09),
    RegisterEntry::write(0x0383, 0x07),
    RegisterEntry::write(0x0385, 0x09),
    RegisterEntry::write(0x0387, 0x07),
    RegisterEntry::write(0x3033, 0x00),
    RegisterEntry::write(0x303D, 0x10),
    RegisterEntry::write(0x303E, 0xD0),
    RegisterEntry::write(0x3040, 0x08),
    RegisterEntry::write(0x3041, 0x97),
    RegisterEntry::write(0x3048, 0x01),
    RegisterEntry::write(0x304C, 0x7F),
    RegisterEntry::write(0x304D, 0x04),
    RegisterEntry::write(0x3064, 0x12),
    RegisterEntry::write(0x309B, 0x28),
    RegisterEntry::write(0x309E, 0x00),
    RegisterEntry::write(0x30D5, 0x09),
    RegisterEntry::write(0x30D6, 0x00),
    RegisterEntry::write(0x30D7, 0x00),
    RegisterEntry::write(0x30D8, 0x00),
    RegisterEntry::write(0x30D9, 0x00),
    RegisterEntry::write(0x30DE, 0x08),
    RegisterEntry::write(0x3102, 0x10),
    RegisterEntry::write(0x3103, 0x44),
    RegisterEntry::write(0x3104, 0x40),
    RegisterEntry::write(0x3105, 0x00),
    RegisterEntry::write(0x3106, 0x0D),
    RegisterEntry::write(0x3107, 0x01),
    RegisterEntry::write(0x310A, 0x0A),
    RegisterEntry::write(0x315C, 0x99),
    RegisterEntry::write(0x315D, 0x98),
    RegisterEntry::write(0x316E, 0x9A),
    RegisterEntry::write(0x316F, 0x99),
    RegisterEntry::write(0x3301, 0x03),
    RegisterEntry::write(0x3304, 0x03),
    RegisterEntry::write(0x3305, 0x02),
    RegisterEntry::write(0x3306, 0x09),
    RegisterEntry::write(0x3307, 0x06),
    RegisterEntry::write(0x3308, 0x1E),
    RegisterEntry::write(0x3309, 0x05),
    RegisterEntry::write(0x330A, 0x05),
    RegisterEntry::write(0x330B, 0x04),
    RegisterEntry::write(0x330C, 0x07),
    RegisterEntry::write(0x330D, 0x06),
    RegisterEntry::write(0x330E, 0x01),
    RegisterEntry::write(0x3318, 0x44),
    RegisterEntry::write(0x3322, 0x0E),
    RegisterEntry::write(0x3342, 0x00),
    RegisterEntry::write(0x3348, 0xE0),
    RegisterEntry::write(0x0101, 0x03),
    // streaming
    RegisterEntry::write(MODE_SELECT, 0x01),
    RegisterEntry::wait(STANDBY_SETTLE_MS),
    RegisterEntry::END,
];

/// 348x260 readout.
pub static MODE_348X260: &[RegisterEntry] = &[
    // software standby
    RegisterEntry::write(MODE_SELECT, 0x00),
    RegisterEntry::wait(STANDBY_SETTLE_MS),
    // global timing
    RegisterEntry::write(0x3087, 0x53),
    RegisterEntry::write(0x309D, 0x94),
    RegisterEntry::write(0x30A1, 0x08),
    RegisterEntry::write(0x30C7, 0x00),
    RegisterEntry::write(0x3115, 0x0E),
    RegisterEntry::write(0x3118, 0x42),
    RegisterEntry::write(0x311D, 0x34),
    RegisterEntry::write(0x3121, 0x0D),
    RegisterEntry::write(0x3212, 0xF2),
    RegisterEntry::write(0x3213, 0x0F),
    RegisterEntry::write(0x3215, 0x0F),
    RegisterEntry::write(0x3217, 0x0B),
    RegisterEntry::write(0x3219, 0x0B),
    RegisterEntry::write(0x321B, 0x0D),
    RegisterEntry::write(0x321D, 0x0D),
    // black level
    RegisterEntry::write(0x3032, 0x40),
    // pll
    RegisterEntry::write(0x0305, 0x02),
    RegisterEntry::write(0x0307, 0x24),
    RegisterEntry::write(0x30A4, 0x02),
    RegisterEntry::write(0x303C, 0x4B),
    // readout geometry
    RegisterEntry::write(0x0112, 0x0A),
    RegisterEntry::write(0x0113, 0x0A),
    RegisterEntry::write(0x0340, 0x01),
    RegisterEntry::write(0x0341, 0x36),
    RegisterEntry::write(0x0342, 0x09),
    RegisterEntry::write(0x0343, 0x06),
    RegisterEntry::write(0x0344, 0x00),
    RegisterEntry::write(0x0345, 0x18),
    RegisterEntry::write(0x0346, 0x00),
    RegisterEntry::write(0x0347, 0x30),
    RegisterEntry::write(0x0348, 0x10),
    RegisterEntry::write(0x0349, 0x67),
    RegisterEntry::write(0x034A, 0x0C),
    RegisterEntry::write(0x034B, 0x5F),
    RegisterEntry::write(0x034C, 0x01),
    RegisterEntry::write(0x034D, 0x5C),
    RegisterEntry::write(0x034E, 0x01),
    RegisterEntry::write(0x034F, 0x04),
    RegisterEntry::write(0x0381, 0x05),
    RegisterEntry::write(0x0383, 0x07),
    RegisterEntry::write(0x0385, 0x0B),
    RegisterEntry::write(0x0387, 0x0D),
    RegisterEntry::write(0x3033, 0x84),
    RegisterEntry::write(0x303D, 0x10),
    RegisterEntry::write(0x303E, 0xD0),
    RegisterEntry::write(0x3040, 0x08),
    RegisterEntry::write(0x3041, 0x97),
    RegisterEntry::write(0x3048, 0x01),
    RegisterEntry::write(0x304C, 0x3F),
    RegisterEntry::write(0x304D, 0x02),
    RegisterEntry::write(0x3064, 0x12),
    RegisterEntry::write(0x309B, 0x48),
    RegisterEntry::write(0x309E, 0x04),
    RegisterEntry::write(0x30D5, 0x0D),
    RegisterEntry::write(0x30D6, 0x00),
    RegisterEntry::write(0x30D7, 0x00),
    RegisterEntry::write(0x30D8, 0x00),
    RegisterEntry::write(0x30D9, 0x00),
    RegisterEntry::write(0x30DE, 0x06),
    RegisterEntry::write(0x3102, 0x09),
    RegisterEntry::write(0x3103, 0x23),
    RegisterEntry::write(0x3104, 0x24),
    RegisterEntry::write(0x3105, 0x00),
    RegisterEntry::write(0x3106, 0x8B),
    RegisterEntry::write(0x3107, 0x00),
    RegisterEntry::write(0x310A, 0x0A),
    RegisterEntry::write(0x315C, 0x4A),
    RegisterEntry::write(0x315D, 0x49),
    RegisterEntry::write(0x316E, 0x4B),
    RegisterEntry::write(0x316F, 0x4A),
    RegisterEntry::write(0x3301, 0x03),
    RegisterEntry::write(0x3304, 0x02),
    RegisterEntry::write(0x3305, 0x00),
    RegisterEntry::write(0x3306, 0x06),
    RegisterEntry::write(0x3307, 0x04),
    RegisterEntry::write(0x3308, 0x10),
    RegisterEntry::write(0x3309, 0x02),
    RegisterEntry::write(0x330A, 0x03),
    RegisterEntry::write(0x330B, 0x01),
    RegisterEntry::write(0x330C, 0x05),
    RegisterEntry::write(0x330D, 0x03),
    RegisterEntry::write(0x330E, 0x01),
    RegisterEntry::write(0x3318, 0x44),
    RegisterEntry::write(0x3322, 0x05),
    RegisterEntry::write(0x3342, 0x00),
    RegisterEntry::write(0x3348, 0xE0),
    RegisterEntry::write(0x0101, 0x03),
    // streaming
    RegisterEntry::write(MODE_SELECT, 0x01),
    RegisterEntry::wait(STANDBY_SETTLE_MS),
    RegisterEntry::END,
];

/// 1948x1096 readout.
pub static MODE_1948X1096: &[RegisterEntry] = &[
    // software standby
    RegisterEntry::write(MODE_SELECT, 0x00),
    RegisterEntry::wait(STANDBY_SETTLE_MS),
    // global timing
    RegisterEntry::write(0x3087, 0x53),
    RegisterEntry::write(0x309D, 0x94),
    RegisterEntry::write(0x30A1, 0x08),
    RegisterEntry::write(0x30C7, 0x00),
    RegisterEntry::write(0x3115, 0x0E),
    RegisterEntry::write(0x3118, 0x42),
    RegisterEntry::write(0x311D, 0x34),
    RegisterEntry::write(0x3121, 0x0D),
    RegisterEntry::write(0x3212, 0xF2),
    RegisterEntry::write(0x3213, 0x0F),
    RegisterEntry::write(0x3215, 0x0F),
    RegisterEntry::write(0x3217, 0x0B),
    RegisterEntry::write(0x3219, 0x0B),
    RegisterEntry::write(0x321B, 0x0D),
    RegisterEntry::write(0x321D, 0x0D),
    // black level
    RegisterEntry::write(0x3032, 0x40),
    // pll
    RegisterEntry::write(0x0305, 0x02),
    RegisterEntry::write(0x0307, 0x24),
    RegisterEntry::write(0x30A4, 0x02),
    RegisterEntry::write(0x303C, 0x4B),
    // readout geometry
    RegisterEntry::write(0x0112, 0x0A),
    RegisterEntry::write(0x0113, 0x0A),
    RegisterEntry::write(0x0340, 0x04),
    RegisterEntry::write(0x0341, 0x5A),
    RegisterEntry::write(0x0342, 0x09),
    RegisterEntry::write(0x0343, 0x06),
    RegisterEntry::write(0x0344, 0x00),
    RegisterEntry::write(0x0345, 0xA4),
    RegisterEntry::write(0x0346, 0x02),
    RegisterEntry::write(0x0347, 0x00),
    RegisterEntry::write(0x0348, 0x0F),
    RegisterEntry::write(0x0349, 0xDB),
    RegisterEntry::write(0x034A, 0x0A),
    RegisterEntry::write(0x034B, 0x8F),
    RegisterEntry::write(0x034C, 0x07),
    RegisterEntry::write(0x034D, 0x9C),
    RegisterEntry::write(0x034E, 0x04),
    RegisterEntry::write(0x034F, 0x48),
    RegisterEntry::write(0x0381, 0x01),
    RegisterEntry::write(0x0383, 0x01),
    RegisterEntry::write(0x0385, 0x01),
    RegisterEntry::write(0x0387, 0x03),
    RegisterEntry::write(0x3033, 0x84),
    RegisterEntry::write(0x303D, 0x10),
    RegisterEntry::write(0x303E, 0xD0),
    RegisterEntry::write(0x3040, 0x08),
    RegisterEntry::write(0x3041, 0x97),
    RegisterEntry::write(0x3048, 0x01),
    RegisterEntry::write(0x304C, 0x3F),
    RegisterEntry::write(0x304D, 0x02),
    RegisterEntry::write(0x3064, 0x12),
    RegisterEntry::write(0x309B, 0x48),
    RegisterEntry::write(0x309E, 0x04),
    RegisterEntry::write(0x30D5, 0x04),
    RegisterEntry::write(0x30D6, 0x85),
    RegisterEntry::write(0x30D7, 0x2A),
    RegisterEntry::write(0x30D8, 0x64),
    RegisterEntry::write(0x30D9, 0x89),
    RegisterEntry::write(0x30DE, 0x00),
    RegisterEntry::write(0x3102, 0x09),
    RegisterEntry::write(0x3103, 0x23),
    RegisterEntry::write(0x3104, 0x24),
    RegisterEntry::write(0x3105, 0x00),
    RegisterEntry::write(0x3106, 0x8B),
    RegisterEntry::write(0x3107, 0x00),
    RegisterEntry::write(0x310A, 0x0A),
    RegisterEntry::write(0x315C, 0x4A),
    RegisterEntry::write(0x315D, 0x49),
    RegisterEntry::write(0x316E, 0x4B),
    RegisterEntry::write(0x316F, 0x4A),
    RegisterEntry::write(0x3301, 0x03),
    RegisterEntry::write(0x3304, 0x05),
    RegisterEntry::write(0x3305, 0x04),
    RegisterEntry::write(0x3306, 0x12),
    RegisterEntry::write(0x3307, 0x03),
    RegisterEntry::write(0x3308, 0x0D),
    RegisterEntry::write(0x3309, 0x05),
    RegisterEntry::write(0x330A, 0x09),
    RegisterEntry::write(0x330B, 0x04),
    RegisterEntry::write(0x330C, 0x08),
    RegisterEntry::write(0x330D, 0x05),
    RegisterEntry::write(0x330E, 0x03),
    RegisterEntry::write(0x3318, 0x66),
    RegisterEntry::write(0x3322, 0x02),
    RegisterEntry::write(0x3342, 0x0F),
    RegisterEntry::write(0x3348, 0xE0),
    RegisterEntry::write(0x0101, 0x03),
    // streaming
    RegisterEntry::write(MODE_SELECT, 0x01),
    RegisterEntry::wait(STANDBY_SETTLE_MS),
    RegisterEntry::END,
];

/// 1308x736 readout.
pub static MODE_1308X736: &[RegisterEntry] = &[
    // software standby
    RegisterEntry::write(MODE_SELECT, 0x00),
    RegisterEntry::wait(STANDBY_SETTLE_MS),
    // global timing
    RegisterEntry::write(0x3087, 0x53),
    RegisterEntry::write(0x309D, 0x94),
    RegisterEntry::write(0x30A1, 0x08),
    RegisterEntry::write(0x30C7, 0x00),
    RegisterEntry::write(0x3115, 0x0E),
    RegisterEntry::write(0x3118, 0x42),
    RegisterEntry::write(0x311D, 0x34),
    RegisterEntry::write(0x3121, 0x0D),
    RegisterEntry::write(0x3212, 0xF2),
    RegisterEntry::write(0x3213, 0x0F),
    RegisterEntry::write(0x3215, 0x0F),
    RegisterEntry::write(0x3217, 0x0B),
    RegisterEntry::write(0x3219, 0x0B),
    RegisterEntry::write(0x321B, 0x0D),
    RegisterEntry::write(0x321D, 0x0D),
    // black level
    RegisterEntry::write(0x3032, 0x40),
    // pll
    RegisterEntry::write(0x0305, 0x02),
    RegisterEntry::write(0x0307, 0x2F),
    RegisterEntry::write(0x30A4, 0x02),
    RegisterEntry::write(0x303C, 0x4B),
    // readout geometry
    RegisterEntry::write(0x0112, 0x0A),
    RegisterEntry::write(0x0113, 0x0A),
    RegisterEntry::write(0x0340, 0x02),
    RegisterEntry::write(0x0341, 0xF0),
    RegisterEntry::write(0x0342, 0x12),
    RegisterEntry::write(0x0343, 0x0C),
    RegisterEntry::write(0x0344, 0x00),
    RegisterEntry::write(0x0345, 0x96),
    RegisterEntry::write(0x0346, 0x01),
    RegisterEntry::write(0x0347, 0xF8),
    RegisterEntry::write(0x0348, 0x0F),
    RegisterEntry::write(0x0349, 0xE9),
    RegisterEntry::write(0x034A, 0x0A),
    RegisterEntry::write(0x034B, 0x97),
    RegisterEntry::write(0x034C, 0x05),
    RegisterEntry::write(0x034D, 0x1C),
    RegisterEntry::write(0x034E, 0x02),
    RegisterEntry::write(0x034F, 0xE0),
    RegisterEntry::write(0x0381, 0x03),
    RegisterEntry::write(0x0383, 0x03),
    RegisterEntry::write(0x0385, 0x03),
    RegisterEntry::write(0x0387, 0x03),
    RegisterEntry::write(0x3033, 0x00),
    RegisterEntry::write(0x303D, 0x10),
    RegisterEntry::write(0x303E, 0xD0),
    RegisterEntry::write(0x3040, 0x08),
    RegisterEntry::write(0x3041, 0x97),
    RegisterEntry::write(0x3048, 0x22),
    RegisterEntry::write(0x304C, 0x7F),
    RegisterEntry::write(0x304D, 0x04),
    RegisterEntry::write(0x3064, 0x12),
    RegisterEntry::write(0x309B, 0x60),
    RegisterEntry::write(0x309E, 0x04),
    RegisterEntry::write(0x30D5, 0x09),
    RegisterEntry::write(0x30D6, 0x00),
    RegisterEntry::write(0x30D7, 0x00),
    RegisterEntry::write(0x30D8, 0x00),
    RegisterEntry::write(0x30D9, 0x89),
    RegisterEntry::write(0x30DE, 0x03),
    RegisterEntry::write(0x3102, 0x09),
    RegisterEntry::write(0x3103, 0x23),
    RegisterEntry::write(0x3104, 0x24),
    RegisterEntry::write(0x3105, 0x00),
    RegisterEntry::write(0x3106, 0x8B),
    RegisterEntry::write(0x3107, 0x00),
    RegisterEntry::write(0x310A, 0x0A),
    RegisterEntry::write(0x315C, 0x4A),
    RegisterEntry::write(0x315D, 0x49),
    RegisterEntry::write(0x316E, 0x4B),
    RegisterEntry::write(0x316F, 0x4A),
    RegisterEntry::write(0x3301, 0x03),
    RegisterEntry::write(0x3304, 0x05),
    RegisterEntry::write(0x3305, 0x04),
    RegisterEntry::write(0x3306, 0x12),
    RegisterEntry::write(0x3307, 0x03),
    RegisterEntry::write(0x3308, 0x0D),
    RegisterEntry::write(0x3309, 0x05),
    RegisterEntry::write(0x330A, 0x09),
    RegisterEntry::write(0x330B, 0x04),
    RegisterEntry::write(0x330C, 0x08),
    RegisterEntry::write(0x330D, 0x05),
    RegisterEntry::write(0x330E, 0x03),
    RegisterEntry::write(0x3318, 0x6A),
    RegisterEntry::write(0x3322, 0x02),
    RegisterEntry::write(0x3342, 0x0F),
    RegisterEntry::write(0x3348, 0xE0),
    RegisterEntry::write(0x0101, 0x03),
    // streaming
    RegisterEntry::write(MODE_SELECT, 0x01),
    RegisterEntry::wait(STANDBY_SETTLE_MS),
    RegisterEntry::END,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::TableOp;

    fn all() -> [&'static [RegisterEntry]; 6] {
        [
            MODE_4208X3120,
            MODE_2104X1560,
            MODE_524X390,
            MODE_348X260,
            MODE_1948X1096,
            MODE_1308X736,
        ]
    }

    #[test]
    fn test_every_table_ends_with_end() {
        for table in all() {
            assert_eq!(table.last().map(RegisterEntry::op), Some(TableOp::End));
            let ends = table.iter().filter(|e| e.op() == TableOp::End).count();
            assert_eq!(ends, 1);
        }
    }

    #[test]
    fn test_tables_enter_standby_first_and_stream_last() {
        for table in all() {
            assert_eq!(table[0], RegisterEntry::write(MODE_SELECT, 0x00));
            assert_eq!(table[1].op(), TableOp::Wait(STANDBY_SETTLE_MS));
            let n = table.len();
            assert_eq!(table[n - 3], RegisterEntry::write(MODE_SELECT, 0x01));
            assert_eq!(table[n - 2].op(), TableOp::Wait(STANDBY_SETTLE_MS));
        }
    }

    #[test]
    fn test_table_values_fit_one_byte() {
        for table in all() {
            for entry in table.iter().filter(|e| !e.is_sentinel()) {
                assert!(entry.value <= 0xFF, "0x{:04X}", entry.address);
            }
        }
    }

    #[test]
    fn test_full_resolution_frame_length_default() {
        let hi = MODE_4208X3120.iter().find(|e| e.address == 0x0340);
        let lo = MODE_4208X3120.iter().find(|e| e.address == 0x0341);
        assert_eq!(hi.map(|e| e.value), Some(0x0C));
        assert_eq!(lo.map(|e| e.value), Some(0x4A));
    }
}
