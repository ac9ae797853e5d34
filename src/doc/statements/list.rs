/*!
# `LIST`

## Purpose
Show the BASIC program currently in memory.

## Remarks
Lines are shown in ascending order. Anything typed after `LIST` is ignored.

## Example
```text
20 PRINT 2
10 PRINT 1
LIST
10 PRINT 1
20 PRINT 2
```

*/
