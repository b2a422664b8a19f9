mod generate;

pub(crate) use generate::GenerateCmd;
