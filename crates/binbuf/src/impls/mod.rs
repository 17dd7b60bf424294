mod map;
mod pointer;
mod scalar;
mod sequence;
mod tuple;
