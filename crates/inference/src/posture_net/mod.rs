// Small binary posture classifier: three conv blocks, global average pool, two linear layers.

mod model;

pub use model::PostureModel;

use candle_core::{D, Result, Tensor};
use candle_nn::{Conv2dConfig, Linear, Module, VarBuilder, conv2d, linear};

/// Number of 2x max-pool stages; the input must be at least `1 << POOL_STAGES` on each side.
pub const POOL_STAGES: usize = 3;

/// Class order of the output vector.
pub const CLASS_BAD: usize = 0;
pub const CLASS_GOOD: usize = 1;

/// Convolution block: Conv2d (with bias) + ReLU + 2x2 max pool
#[derive(Debug)]
pub struct ConvBlock {
    conv: candle_nn::Conv2d,
}

impl ConvBlock {
    pub fn load(vb: VarBuilder, c1: usize, c2: usize, k: usize) -> Result<Self> {
        let conv = conv2d(
            c1,
            c2,
            k,
            Conv2dConfig {
                padding: k / 2,
                stride: 1,
                groups: 1,
                dilation: 1,
                ..Default::default()
            },
            vb,
        )?;
        Ok(Self { conv })
    }
}

impl Module for ConvBlock {
    fn forward(&self, xs: &Tensor) -> Result<Tensor> {
        xs.apply(&self.conv)?.relu()?.max_pool2d(2)
    }
}

/// Grayscale posture network, `[1, 1, h, w]` in `[0, 1]` to `[1, 2]` probabilities.
#[derive(Debug)]
pub struct PostureNet {
    conv1: ConvBlock,
    conv2: ConvBlock,
    conv3: ConvBlock,
    fc1: Linear,
    fc2: Linear,
}

impl PostureNet {
    pub fn load(vb: VarBuilder) -> Result<Self> {
        let conv1 = ConvBlock::load(vb.pp("conv1"), 1, 32, 5)?;
        let conv2 = ConvBlock::load(vb.pp("conv2"), 32, 64, 3)?;
        let conv3 = ConvBlock::load(vb.pp("conv3"), 64, 64, 3)?;
        let fc1 = linear(64, 128, vb.pp("fc1"))?;
        let fc2 = linear(128, 2, vb.pp("fc2"))?;
        Ok(Self {
            conv1,
            conv2,
            conv3,
            fc1,
            fc2,
        })
    }
}

impl Module for PostureNet {
    fn forward(&self, xs: &Tensor) -> Result<Tensor> {
        let features = xs
            .apply(&self.conv1)?
            .apply(&self.conv2)?
            .apply(&self.conv3)?
            // global average pool over height and width
            .mean((2, 3))?;
        let logits = features.apply(&self.fc1)?.relu()?.apply(&self.fc2)?;
        candle_nn::ops::softmax(&logits, D::Minus1)
    }
}
