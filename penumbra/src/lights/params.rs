use super::light::{Light, LightSamplePoint};
use crate::math::{Normal, Point3};

use itertools::Itertools;
use std::{collections::TryReserveError, str::FromStr};

// Light parameters come in as a material parameter string like
// "bright=1000 angle=45 shadows=16 target=0,0,0"

#[derive(Debug, PartialEq)]
pub enum ParamError {
    MissingValue(String),
    UnknownParam(String),
    InvalidValue { name: String, value: String },
}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::MissingValue(name) => write!(f, "No value given for '{}'", name),
            ParamError::UnknownParam(name) => write!(f, "Unknown light parameter '{}'", name),
            ParamError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{}' for '{}'", value, name)
            }
        }
    }
}

impl std::error::Error for ParamError {}

/// Parsed light parameters, `None` means the default is kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightParams {
    pub intensity: Option<f32>,
    pub angle: Option<f32>,
    pub fraction: Option<f32>,
    /// Point the light is aimed at
    pub target: Option<Point3<f32>>,
    pub shadows: Option<u32>,
    pub infinite: Option<bool>,
    /// Last of "visible" or "invisible" given, as visibility
    pub visible: Option<bool>,
    /// Explicit sample points from "pt" and "pn"
    pub points: Vec<LightSamplePoint>,
}

impl LightParams {
    /// Writes the given parameters into `light`.
    pub fn apply(&self, light: &mut Light) -> Result<(), TryReserveError> {
        if let Some(intensity) = self.intensity {
            light.intensity = intensity;
        }
        if let Some(angle) = self.angle {
            light.set_half_angle(angle);
        }
        if let Some(fraction) = self.fraction {
            light.fraction = fraction;
        }
        if let Some(target) = self.target {
            light.explicit_aim = true;
            // Aim is finalized once the light position is known
            let to_target = target - light.position;
            if to_target.len_sqr() > 0.0 {
                light.aim = to_target.normalized();
            }
        }
        if let Some(shadows) = self.shadows {
            light.shadows = shadows;
        }
        if let Some(infinite) = self.infinite {
            light.infinite = infinite;
        }
        if let Some(visible) = self.visible {
            light.set_visible(visible);
        }
        for &p in &self.points {
            light.push_sample(p)?;
        }
        Ok(())
    }
}

fn parse_floats(name: &str, value: &str) -> Result<Vec<f32>, ParamError> {
    value
        .split(|c| c == ',' || c == '/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f32>().map_err(|_| ParamError::InvalidValue {
                name: name.into(),
                value: value.into(),
            })
        })
        .collect()
}

fn parse_f32(name: &str, value: &str) -> Result<f32, ParamError> {
    match parse_floats(name, value)?.as_slice() {
        [v] => Ok(*v),
        _ => Err(ParamError::InvalidValue {
            name: name.into(),
            value: value.into(),
        }),
    }
}

fn parse_point(name: &str, value: &str) -> Result<Point3<f32>, ParamError> {
    parse_floats(name, value)?
        .into_iter()
        .collect_tuple()
        .map(|(x, y, z)| Point3::new(x, y, z))
        .ok_or_else(|| ParamError::InvalidValue {
            name: name.into(),
            value: value.into(),
        })
}

fn parse_i32(name: &str, value: &str) -> Result<i32, ParamError> {
    value.parse::<i32>().map_err(|_| ParamError::InvalidValue {
        name: name.into(),
        value: value.into(),
    })
}

impl FromStr for LightParams {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ret = LightParams::default();
        for token in s.split_whitespace() {
            let (name, value) = match token.split_once('=') {
                Some((name, value)) if !value.is_empty() => (name, value),
                Some((name, _)) => return Err(ParamError::MissingValue(name.into())),
                None => return Err(ParamError::MissingValue(token.into())),
            };

            match name {
                "bright" | "b" | "inten" => ret.intensity = Some(parse_f32(name, value)?),
                "angle" | "a" => ret.angle = Some(parse_f32(name, value)?),
                "fract" | "f" => ret.fraction = Some(parse_f32(name, value)?),
                "target" | "t" | "aim" | "d" | "dir" => ret.target = Some(parse_point(name, value)?),
                "shadows" | "s" => {
                    let shadows = parse_i32(name, value)?;
                    ret.shadows = Some(u32::try_from(shadows).map_err(|_| {
                        ParamError::InvalidValue {
                            name: name.into(),
                            value: value.into(),
                        }
                    })?);
                }
                "infinite" | "i" => ret.infinite = Some(parse_i32(name, value)? != 0),
                "visible" | "v" => ret.visible = Some(parse_i32(name, value)? != 0),
                "invisible" => ret.visible = Some(parse_i32(name, value)? == 0),
                "pt" => {
                    let p = parse_point(name, value)?;
                    ret.points.push(LightSamplePoint {
                        p,
                        n: Normal::zeros(),
                    });
                }
                "pn" => match parse_floats(name, value)?.as_slice() {
                    &[px, py, pz, nx, ny, nz] => ret.points.push(LightSamplePoint {
                        p: Point3::new(px, py, pz),
                        n: Normal::new(nx, ny, nz),
                    }),
                    _ => {
                        return Err(ParamError::InvalidValue {
                            name: name.into(),
                            value: value.into(),
                        })
                    }
                },
                _ => return Err(ParamError::UnknownParam(name.into())),
            }
        }
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::{LightParams, ParamError};
    use crate::{
        lights::Light,
        math::{Normal, Point3, Vec3},
    };
    use approx::assert_relative_eq;

    #[test]
    fn parse() {
        let params: LightParams = "bright=1000 a=30 fract=0.25 s=16 i=1 target=0,0,10"
            .parse()
            .unwrap();
        assert_eq!(params.intensity, Some(1000.0));
        assert_eq!(params.angle, Some(30.0));
        assert_eq!(params.fraction, Some(0.25));
        assert_eq!(params.shadows, Some(16));
        assert_eq!(params.infinite, Some(true));
        assert_eq!(params.target, Some(Point3::new(0.0, 0.0, 10.0)));
        assert_eq!(params.visible, None);
    }

    #[test]
    fn visibility_last_wins() {
        let params: LightParams = "invisible=1".parse().unwrap();
        assert_eq!(params.visible, Some(false));
        let params: LightParams = "invisible=1 v=1".parse().unwrap();
        assert_eq!(params.visible, Some(true));
    }

    #[test]
    fn sample_points() {
        let params: LightParams = "pt=1/2/3 pn=0,0,5,0,0,-1".parse().unwrap();
        assert_eq!(params.points.len(), 2);
        assert!(params.points[0].is_omnidirectional());
        assert_eq!(params.points[1].p, Point3::new(0.0, 0.0, 5.0));
        assert_eq!(params.points[1].n, Normal::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn errors() {
        assert_eq!(
            "glow=1".parse::<LightParams>(),
            Err(ParamError::UnknownParam("glow".into()))
        );
        assert_eq!(
            "bright".parse::<LightParams>(),
            Err(ParamError::MissingValue("bright".into()))
        );
        assert!(matches!(
            "s=-2".parse::<LightParams>(),
            Err(ParamError::InvalidValue { .. })
        ));
        assert!(matches!(
            "target=1,2".parse::<LightParams>(),
            Err(ParamError::InvalidValue { .. })
        ));
        assert!(matches!(
            "pn=1,2,3".parse::<LightParams>(),
            Err(ParamError::InvalidValue { .. })
        ));
    }

    #[test]
    fn apply() {
        let params: LightParams = "angle=200 shadows=0 target=0,0,10 pt=1,1,1".parse().unwrap();
        let mut light = Light::new("light", None, Point3::zeros(), 1.0);
        params.apply(&mut light).unwrap();
        assert_eq!(light.half_angle(), 180.0);
        assert_eq!(light.shadows, 0);
        assert!(light.explicit_aim);
        assert_relative_eq!(light.aim, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(light.sample_count(), 1);
    }
}
