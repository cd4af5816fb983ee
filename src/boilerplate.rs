//! Fixed text framing the generated `arm_mve_tables.c` / `arm_mve_tables.h`.
//!
//! The consuming library compiles these files unmodified, so every byte here
//! (including the stray leading spaces before the preprocessor lines) is part
//! of the output format.

use core::fmt::{self, Write};

use crate::size::TransformSize;

macro_rules! license_block {
    ($title:literal) => {
        concat!(
            "/* ----------------------------------------------------------------------\n",
            " * Project:      CMSIS DSP Library\n",
            " * Title:        ",
            $title,
            "\n",
            " * Description:  common tables like fft twiddle factors, Bitreverse, reciprocal etc\n",
            " *               used for MVE implementation only\n",
            " *\n",
            " * $Date:        08. January 2020\n",
            " * $Revision:    V1.7.0\n",
            " *\n",
            " * Target Processor: Cortex-M cores\n",
            " * -------------------------------------------------------------------- */\n",
            "/*\n",
            " * Copyright (C) 2010-2020 ARM Limited or its affiliates. All rights reserved.\n",
            " *\n",
            " * SPDX-License-Identifier: Apache-2.0\n",
            " *\n",
            " * Licensed under the Apache License, Version 2.0 (the License); you may\n",
            " * not use this file except in compliance with the License.\n",
            " * You may obtain a copy of the License at\n",
            " *\n",
            " * www.apache.org/licenses/LICENSE-2.0\n",
            " *\n",
            " * Unless required by applicable law or agreed to in writing, software\n",
            " * distributed under the License is distributed on an AS IS BASIS, WITHOUT\n",
            " * WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.\n",
            " * See the License for the specific language governing permissions and\n",
            " * limitations under the License.\n",
            " */\n",
            "\n",
        )
    };
}

macro_rules! feature_guards {
    () => {
        concat!(
            " #include \"arm_math.h\"\n",
            "\n",
            " #if defined(ARM_MATH_MVEF) && !defined(ARM_MATH_AUTOVECTORIZE)\n",
            "\n",
            " #if !defined(ARM_DSP_CONFIG_TABLES) || defined(ARM_FFT_ALLOW_TABLES)\n",
            "\n",
            "\n",
            " \n",
        )
    };
}

/// Opening of the definitions file.
pub const SOURCE_HEADER: &str = concat!(license_block!("arm_mve_tables.c"), feature_guards!());

/// Opening of the declarations file, including its include guard.
pub const HEADER_HEADER: &str = concat!(
    license_block!("arm_mve_tables.h"),
    " #ifndef _ARM_MVE_TABLES_H\n",
    " #define _ARM_MVE_TABLES_H\n",
    "\n",
    feature_guards!(),
);

/// Closing of the definitions file.
pub const SOURCE_FOOTER: &str = concat!(
    "\n",
    "\n",
    "#endif /* !defined(ARM_DSP_CONFIG_TABLES) || defined(ARM_FFT_ALLOW_TABLES) */\n",
    "#endif /* defined(ARM_MATH_MVEF) && !defined(ARM_MATH_AUTOVECTORIZE) */\n",
    "\n",
);

/// Closing of the declarations file.
pub const HEADER_FOOTER: &str = concat!(
    "\n",
    "#endif /* !defined(ARM_DSP_CONFIG_TABLES) || defined(ARM_FFT_ALLOW_TABLES) */\n",
    "\n",
    "#endif /* defined(ARM_MATH_MVEF) && !defined(ARM_MATH_AUTOVECTORIZE) */\n",
    "\n",
    "#endif /*_ARM_MVE_TABLES_H*/\n",
    "\n",
);

/// Closes the block opened by [`write_size_guard`].
pub const SIZE_GUARD_END: &str = "#endif\n\n";

/// Preprocessor condition enabling the tables of one transform size.
///
/// Keyed on the complex length `n` and on `2n`, the real length served by the
/// same complex table.
pub fn write_size_guard<W: Write>(out: &mut W, size: TransformSize) -> fmt::Result {
    let n = size.len();
    write!(
        out,
        "#if !defined(ARM_DSP_CONFIG_TABLES) || defined(ARM_ALL_FFT_TABLES) || \
         defined(ARM_TABLE_TWIDDLECOEF_F32_{}) || defined(ARM_TABLE_TWIDDLECOEF_F32_{})\n\n",
        n,
        n << 1
    )
}
