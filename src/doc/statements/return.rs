/*!
# `RETURN`

## Purpose
`RETURN` is used at the end of a subroutine.

## Remarks
See `GOSUB`. A `RETURN` without a `GOSUB` stops the program.

## Example
```text
10 GOSUB 100
20 PRINT 2
90 END
100 PRINT 1
110 RETURN
RUN
1
2
```

*/
